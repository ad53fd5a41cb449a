//! Easing curves, rendered as CSS timing functions so the browser
//! interpolates time-based transitions.

use std::fmt;
use std::str::FromStr;

/// Default overshoot for `back.out` when none is given.
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Supported easing curves
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Ease {
    /// Constant speed ("none")
    Linear,
    /// Quadratic ease-out
    #[default]
    Power1Out,
    /// Quadratic ease-in-out
    Power1InOut,
    /// Cubic ease-out
    Power2Out,
    /// Cubic ease-in-out
    Power2InOut,
    /// Ease-out that overshoots the target before settling
    BackOut(f64),
}

impl Ease {
    /// CSS timing function approximating the curve
    pub fn css(&self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::Power1Out => "cubic-bezier(0.5, 1, 0.89, 1)".to_string(),
            Ease::Power1InOut => "cubic-bezier(0.45, 0, 0.55, 1)".to_string(),
            Ease::Power2Out => "cubic-bezier(0.33, 1, 0.68, 1)".to_string(),
            Ease::Power2InOut => "cubic-bezier(0.65, 0, 0.35, 1)".to_string(),
            Ease::BackOut(s) => {
                // 1.56 is the control point for the default overshoot
                let y1 = 1.0 + 0.56 * s / DEFAULT_OVERSHOOT;
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", y1)
            }
        }
    }
}

/// Error returned when an easing name is not recognised
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown easing curve: {0}")]
pub struct EaseParseError(pub String);

impl FromStr for Ease {
    type Err = EaseParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "none" | "linear" => return Ok(Ease::Linear),
            "power1" | "power1.out" => return Ok(Ease::Power1Out),
            "power1.inOut" => return Ok(Ease::Power1InOut),
            "power2" | "power2.out" => return Ok(Ease::Power2Out),
            "power2.inOut" => return Ok(Ease::Power2InOut),
            "back.out" => return Ok(Ease::BackOut(DEFAULT_OVERSHOOT)),
            _ => {}
        }

        let overshoot = name
            .strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|arg| arg.trim().parse::<f64>().ok());

        match overshoot {
            Some(s) if s.is_finite() => Ok(Ease::BackOut(s)),
            _ => Err(EaseParseError(name.to_string())),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => write!(f, "none"),
            Ease::Power1Out => write!(f, "power1.out"),
            Ease::Power1InOut => write!(f, "power1.inOut"),
            Ease::Power2Out => write!(f, "power2.out"),
            Ease::Power2InOut => write!(f, "power2.inOut"),
            Ease::BackOut(s) => write!(f, "back.out({})", s),
        }
    }
}
