//! Sequenced animation steps with relative positioning.

use super::stagger::Stagger;

/// Placement of a step relative to the timeline built so far
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Starts when the timeline currently ends
    AfterPrevious,
    /// Starts this many seconds before the current end (clamped at zero)
    Overlap(f64),
    /// Absolute start, in seconds from the timeline origin
    At(f64),
}

/// One placed step
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub label: &'static str,
    /// Start relative to the timeline origin (excluding the initial delay)
    pub start: f64,
    /// Total time the step occupies, including any stagger spread
    pub duration: f64,
}

impl Step {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Ordered collection of steps with an optional initial delay
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    delay: f64,
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay before the first step, in seconds
    pub fn with_delay(delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            steps: Vec::new(),
        }
    }

    fn current_end(&self) -> f64 {
        self.steps.iter().map(Step::end).fold(0.0, f64::max)
    }

    fn resolve(&self, position: Position) -> f64 {
        match position {
            Position::AfterPrevious => self.current_end(),
            Position::Overlap(seconds) => (self.current_end() - seconds).max(0.0),
            Position::At(seconds) => seconds.max(0.0),
        }
    }

    /// Append a step of `duration` seconds
    pub fn then(mut self, label: &'static str, duration: f64, position: Position) -> Self {
        let start = self.resolve(position);
        self.steps.push(Step {
            label,
            start,
            duration: duration.max(0.0),
        });
        self
    }

    /// Append a step animating `count` items, each running `duration` seconds
    /// and offset from one another by `stagger`
    pub fn then_staggered(
        self,
        label: &'static str,
        duration: f64,
        stagger: Stagger,
        count: usize,
        position: Position,
    ) -> Self {
        self.then(label, duration + stagger.span(count), position)
    }

    fn step(&self, label: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.label == label)
    }

    /// Absolute start time of a step, including the initial delay
    pub fn start_of(&self, label: &str) -> Option<f64> {
        self.step(label).map(|s| self.delay + s.start)
    }

    /// Absolute end time of a step, including the initial delay
    pub fn end_of(&self, label: &str) -> Option<f64> {
        self.step(label).map(|s| self.delay + s.end())
    }

    /// Total running time, including the initial delay
    pub fn duration(&self) -> f64 {
        self.delay + self.current_end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::StaggerFrom;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_sequential_steps() {
        let tl = Timeline::new()
            .then("a", 1.0, Position::AfterPrevious)
            .then("b", 0.5, Position::AfterPrevious);
        assert_eq!(tl.start_of("b"), Some(1.0));
        assert_eq!(tl.duration(), 1.5);
    }

    #[test]
    fn test_overlap_is_relative_to_timeline_end() {
        // A short step inside a long one does not pull the end back
        let tl = Timeline::new()
            .then("long", 2.0, Position::AfterPrevious)
            .then("short", 0.5, Position::At(0.2))
            .then("next", 1.0, Position::Overlap(0.5));
        assert_eq!(tl.start_of("next"), Some(1.5));
    }

    #[test]
    fn test_overlap_clamps_at_zero() {
        let tl = Timeline::new()
            .then("a", 0.3, Position::AfterPrevious)
            .then("b", 1.0, Position::Overlap(2.0));
        assert_eq!(tl.start_of("b"), Some(0.0));
    }

    #[test]
    fn test_staggered_step_occupies_spread() {
        let tl = Timeline::new().then_staggered("pair", 0.8, Stagger::each(0.2), 2, Position::AfterPrevious);
        assert!(close(tl.end_of("pair").unwrap(), 1.0));

        let single = Timeline::new().then_staggered("one", 0.8, Stagger::each(0.2), 1, Position::AfterPrevious);
        assert!(close(single.duration(), 0.8));

        let spread = Timeline::new().then_staggered(
            "spread",
            0.5,
            Stagger::amount(2.0, StaggerFrom::End),
            5,
            Position::AfterPrevious,
        );
        assert!(close(spread.duration(), 2.5));
    }

    #[test]
    fn test_delay_shifts_everything() {
        let tl = Timeline::with_delay(0.5).then("a", 1.0, Position::AfterPrevious);
        assert_eq!(tl.start_of("a"), Some(0.5));
        assert_eq!(tl.end_of("a"), Some(1.5));
        assert_eq!(tl.duration(), 1.5);
        assert_eq!(tl.start_of("missing"), None);
    }
}
