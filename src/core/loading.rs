//! Loading gate and preloader sequencing
//!
//! The page starts behind a preloader with document scrolling disabled. When
//! the preloader sequence finishes the gate opens once, scrolling comes back
//! and the main content fades in.

use super::motion::{Ease, Position, Props, Stagger, Timeline, Tween};

/// Document-wide scroll lock
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Holds the scroll lock until the preloader reports completion
#[derive(Debug)]
pub struct LoadingGate<L: ScrollLock> {
    lock: L,
    loading: bool,
}

impl<L: ScrollLock> LoadingGate<L> {
    /// Engages the lock immediately
    pub fn new(lock: L) -> Self {
        lock.lock();
        Self {
            lock,
            loading: true,
        }
    }

    /// Opens the gate. Only the first call does anything and returns `true`.
    pub fn finish(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        self.lock.unlock();
        true
    }

    pub fn content_visible(&self) -> bool {
        !self.loading
    }
}

impl<L: ScrollLock> Drop for LoadingGate<L> {
    fn drop(&mut self) {
        // Always hand scrolling back on teardown, even mid-sequence
        self.lock.unlock();
    }
}

/// Stages of the preloader overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreloaderPhase {
    /// Name and tagline fade in
    Intro,
    /// Progress bar fills
    Progress,
    /// Name and tagline fade out
    Outro,
    /// Overlay fades and shrinks away
    Exit,
    /// Sequence over, gate may open
    Done,
}

impl PreloaderPhase {
    pub const ORDER: [PreloaderPhase; 5] = [
        PreloaderPhase::Intro,
        PreloaderPhase::Progress,
        PreloaderPhase::Outro,
        PreloaderPhase::Exit,
        PreloaderPhase::Done,
    ];

    fn label(self) -> &'static str {
        match self {
            PreloaderPhase::Intro => "intro",
            PreloaderPhase::Progress => "progress",
            PreloaderPhase::Outro => "outro",
            PreloaderPhase::Exit => "exit",
            PreloaderPhase::Done => "done",
        }
    }
}

/// Number of text lines (name, tagline) animated in the intro and outro
pub const PRELOADER_LINES: usize = 2;

pub const INTRO_TEXT: Tween = Tween::new(Props::new().opacity(0.0).y(30.0), Props::new().opacity(1.0).y(0.0))
    .duration(0.8)
    .ease(Ease::Power2Out);
pub const INTRO_STAGGER: Stagger = Stagger::each(0.2);

pub const PROGRESS_BAR: Tween = Tween::new(Props::new().width_pct(0.0), Props::new().width_pct(100.0))
    .duration(2.5)
    .ease(Ease::Power2Out);

pub const OUTRO_TEXT: Tween = Tween::new(Props::new().opacity(1.0).y(0.0), Props::new().opacity(0.0).y(-30.0))
    .duration(0.5);
pub const OUTRO_STAGGER: Stagger = Stagger::each(0.1);

pub const OVERLAY_EXIT: Tween = Tween::new(Props::new().opacity(1.0).scale(1.0), Props::new().opacity(0.0).scale(0.9))
    .duration(0.8)
    .ease(Ease::Power2InOut);

/// Fade-in of the main content once the gate opens
pub const CONTENT_REVEAL: Tween = Tween::new(Props::new().opacity(0.0), Props::new().opacity(1.0))
    .duration(1.0)
    .ease(Ease::Power2Out);

/// The full preloader sequence
pub fn preloader_timeline() -> Timeline {
    Timeline::new()
        .then_staggered(
            PreloaderPhase::Intro.label(),
            INTRO_TEXT.duration,
            INTRO_STAGGER,
            PRELOADER_LINES,
            Position::AfterPrevious,
        )
        .then(
            PreloaderPhase::Progress.label(),
            PROGRESS_BAR.duration,
            Position::AfterPrevious,
        )
        .then_staggered(
            PreloaderPhase::Outro.label(),
            OUTRO_TEXT.duration,
            OUTRO_STAGGER,
            PRELOADER_LINES,
            Position::AfterPrevious,
        )
        .then(
            PreloaderPhase::Exit.label(),
            OVERLAY_EXIT.duration,
            Position::AfterPrevious,
        )
}

/// Start time of each phase, in seconds from mount
pub fn schedule() -> Vec<(PreloaderPhase, f64)> {
    let timeline = preloader_timeline();
    PreloaderPhase::ORDER
        .into_iter()
        .map(|phase| {
            let at = match phase {
                PreloaderPhase::Done => timeline.duration(),
                other => timeline.start_of(other.label()).unwrap_or_default(),
            };
            (phase, at)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingLock {
        locks: Rc<Cell<u32>>,
        unlocks: Rc<Cell<u32>>,
    }

    impl ScrollLock for CountingLock {
        fn lock(&self) {
            self.locks.set(self.locks.get() + 1);
        }

        fn unlock(&self) {
            self.unlocks.set(self.unlocks.get() + 1);
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gate_locks_on_creation() {
        let lock = CountingLock::default();
        let gate = LoadingGate::new(lock.clone());
        assert!(!gate.content_visible());
        assert_eq!(lock.locks.get(), 1);
        assert_eq!(lock.unlocks.get(), 0);
    }

    #[test]
    fn test_finish_runs_once() {
        let lock = CountingLock::default();
        let mut gate = LoadingGate::new(lock.clone());

        assert!(gate.finish());
        assert!(gate.content_visible());
        assert!(!gate.finish());
        assert_eq!(lock.unlocks.get(), 1);
    }

    #[test]
    fn test_drop_releases_lock() {
        let lock = CountingLock::default();
        {
            let _gate = LoadingGate::new(lock.clone());
        }
        assert_eq!(lock.unlocks.get(), 1);
    }

    #[test]
    fn test_schedule_matches_sequence() {
        let schedule = schedule();
        let expected = [
            (PreloaderPhase::Intro, 0.0),
            (PreloaderPhase::Progress, 1.0),
            (PreloaderPhase::Outro, 3.5),
            (PreloaderPhase::Exit, 4.1),
            (PreloaderPhase::Done, 4.9),
        ];
        assert_eq!(schedule.len(), expected.len());
        for ((phase, at), (want_phase, want_at)) in schedule.into_iter().zip(expected) {
            assert_eq!(phase, want_phase);
            assert!(close(at, want_at), "{phase:?} at {at}, expected {want_at}");
        }
    }

    #[test]
    fn test_phase_order() {
        assert!(PreloaderPhase::ORDER.windows(2).all(|w| w[0] < w[1]));
    }
}
