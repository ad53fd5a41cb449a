//! Viewport scroll triggers.
//!
//! A trigger divides the scroll position of an element into three zones:
//! before its start line, inside the active band, and past its end line.
//! Crossing between zones fires the configured toggle actions.

use std::str::FromStr;

/// What to do with the animation when a boundary is crossed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Reverse,
}

impl FromStr for ToggleAction {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ToggleAction::None),
            "play" => Ok(ToggleAction::Play),
            "reverse" => Ok(ToggleAction::Reverse),
            other => Err(TriggerParseError::UnknownAction(other.to_string())),
        }
    }
}

/// Errors parsing trigger configuration strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerParseError {
    #[error("unknown toggle action: {0}")]
    UnknownAction(String),
    #[error("expected 4 toggle actions, got {0}")]
    WrongArity(usize),
}

/// Actions for the four boundary crossings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Play once on enter; undo only when scrolled back above the start line
    pub const PLAY_REVERSE: ToggleActions = ToggleActions {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_REVERSE
    }
}

impl FromStr for ToggleActions {
    type Err = TriggerParseError;

    /// Parses the space separated form, e.g. `"play none none reverse"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();
        if parts.len() != 4 {
            return Err(TriggerParseError::WrongArity(parts.len()));
        }
        Ok(ToggleActions {
            on_enter: parts[0].parse()?,
            on_leave: parts[1].parse()?,
            on_enter_back: parts[2].parse()?,
            on_leave_back: parts[3].parse()?,
        })
    }
}

/// Position of an element relative to its trigger band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Element top has not reached the start line yet
    Before,
    /// Between start and end
    Active,
    /// Element bottom has scrolled past the end line
    After,
}

/// Trigger geometry and behaviour.
///
/// `start_pct` is the viewport line (percent from the top) that the element's
/// top edge must cross; `end_pct` is the line its bottom edge must cross for
/// the element to count as passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start_pct: f64,
    pub end_pct: f64,
    pub actions: ToggleActions,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::at(80.0)
    }
}

impl ScrollTrigger {
    /// Trigger starting when the element top crosses `start_pct` of the viewport
    pub const fn at(start_pct: f64) -> Self {
        Self {
            start_pct,
            end_pct: 0.0,
            actions: ToggleActions::PLAY_REVERSE,
        }
    }

    pub const fn ending_at(mut self, end_pct: f64) -> Self {
        self.end_pct = end_pct;
        self
    }

    /// Classify an element's bounding box (viewport coordinates)
    pub fn zone(&self, top: f64, bottom: f64, viewport_height: f64) -> Zone {
        let start_line = viewport_height * self.start_pct / 100.0;
        let end_line = viewport_height * self.end_pct / 100.0;
        if top >= start_line {
            Zone::Before
        } else if bottom <= end_line {
            Zone::After
        } else {
            Zone::Active
        }
    }

    /// IntersectionObserver root margin matching the trigger band
    pub fn root_margin(&self) -> String {
        let top = -self.end_pct.clamp(0.0, 100.0);
        let bottom = -(100.0 - self.start_pct.clamp(0.0, 100.0));
        format!(
            "{}% 0px {}% 0px",
            super::tween::css_number(top),
            super::tween::css_number(bottom)
        )
    }
}

/// Tracks the last observed zone and whether the animation is played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerState {
    zone: Zone,
    active: bool,
}

impl Default for TriggerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TriggerState {
    pub const fn new() -> Self {
        Self {
            zone: Zone::Before,
            active: false,
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play => self.active = true,
            ToggleAction::Reverse => self.active = false,
            ToggleAction::None => {}
        }
    }

    /// Move to `zone`, firing the crossings in between. Returns the new
    /// played state.
    pub fn advance(&mut self, zone: Zone, actions: &ToggleActions) -> bool {
        use Zone::*;

        let crossings = match (self.zone, zone) {
            (Before, Active) => [Some(actions.on_enter), None],
            (Before, After) => [Some(actions.on_enter), Some(actions.on_leave)],
            (Active, After) => [Some(actions.on_leave), None],
            (After, Active) => [Some(actions.on_enter_back), None],
            (After, Before) => [Some(actions.on_enter_back), Some(actions.on_leave_back)],
            (Active, Before) => [Some(actions.on_leave_back), None],
            _ => [None, None],
        };
        for action in crossings.into_iter().flatten() {
            self.apply(action);
        }
        self.zone = zone;
        self.active
    }
}
