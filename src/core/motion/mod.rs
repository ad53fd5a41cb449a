//! Animation model
//!
//! Declarative tweens, staggers, timelines and scroll triggers. Everything here
//! is plain data and arithmetic; the UI layer turns it into inline CSS and
//! browser observers.

pub mod ease;
pub mod scrub;
pub mod stagger;
pub mod timeline;
pub mod trigger;
pub mod tween;

pub use ease::{Ease, EaseParseError};
pub use scrub::{PinScrub, SCRUB_SMOOTHING, WIDE_VIEWPORT_MIN, is_wide};
pub use stagger::{Stagger, StaggerFrom};
pub use timeline::{Position, Step, Timeline};
pub use trigger::{ScrollTrigger, ToggleAction, ToggleActions, TriggerParseError, TriggerState, Zone};
pub use tween::{Props, Tween, css_number};
