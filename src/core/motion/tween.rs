//! Property tweens rendered as inline CSS.

use super::ease::Ease;

/// Default tween duration in seconds
pub const DEFAULT_DURATION: f64 = 0.5;

/// Format a number for CSS: at most three decimals, no negative zero
pub fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Animatable visual properties. Unset properties are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f64>,
    /// Horizontal offset in px
    pub x: Option<f64>,
    /// Vertical offset in px
    pub y: Option<f64>,
    pub scale: Option<f64>,
    /// Rotation around the Y axis in degrees
    pub rotate_y: Option<f64>,
    /// Gaussian blur radius in px
    pub blur: Option<f64>,
    /// Width as a percentage of the parent
    pub width_pct: Option<f64>,
}

impl Props {
    pub const fn new() -> Self {
        Self {
            opacity: None,
            x: None,
            y: None,
            scale: None,
            rotate_y: None,
            blur: None,
            width_pct: None,
        }
    }

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub const fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub const fn rotate_y(mut self, value: f64) -> Self {
        self.rotate_y = Some(value);
        self
    }

    pub const fn blur(mut self, value: f64) -> Self {
        self.blur = Some(value);
        self
    }

    pub const fn width_pct(mut self, value: f64) -> Self {
        self.width_pct = Some(value);
        self
    }

    fn has_transform(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.scale.is_some() || self.rotate_y.is_some()
    }

    /// CSS `transform` value, if any transform component is set
    pub fn transform(&self) -> Option<String> {
        if !self.has_transform() {
            return None;
        }

        let mut parts = Vec::with_capacity(3);
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                css_number(self.x.unwrap_or(0.0)),
                css_number(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", css_number(scale)));
        }
        if let Some(deg) = self.rotate_y {
            parts.push(format!("rotateY({}deg)", css_number(deg)));
        }
        Some(parts.join(" "))
    }

    /// Inline declarations for every set property
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            css.push_str(&format!("opacity: {}; ", css_number(opacity)));
        }
        if let Some(transform) = self.transform() {
            css.push_str(&format!("transform: {}; ", transform));
        }
        if let Some(blur) = self.blur {
            css.push_str(&format!("filter: blur({}px); ", css_number(blur)));
        }
        if let Some(width) = self.width_pct {
            css.push_str(&format!("width: {}%; ", css_number(width)));
        }
        css.trim_end().to_string()
    }

    /// CSS property names this set of props writes to
    pub fn css_properties(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.opacity.is_some() {
            names.push("opacity");
        }
        if self.has_transform() {
            names.push("transform");
        }
        if self.blur.is_some() {
            names.push("filter");
        }
        if self.width_pct.is_some() {
            names.push("width");
        }
        names
    }

    /// Merge two prop sets; values in `other` win
    pub fn merge(&self, other: &Props) -> Props {
        Props {
            opacity: other.opacity.or(self.opacity),
            x: other.x.or(self.x),
            y: other.y.or(self.y),
            scale: other.scale.or(self.scale),
            rotate_y: other.rotate_y.or(self.rotate_y),
            blur: other.blur.or(self.blur),
            width_pct: other.width_pct.or(self.width_pct),
        }
    }
}

/// A from/to transition between two prop sets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Props,
    pub to: Props,
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub const fn new(from: Props, to: Props) -> Self {
        Self {
            from,
            to,
            duration: DEFAULT_DURATION,
            ease: Ease::Power1Out,
        }
    }

    pub const fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub const fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Union of CSS properties touched by either end of the tween
    fn css_properties(&self) -> Vec<&'static str> {
        let mut names = self.from.css_properties();
        for name in self.to.css_properties() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// `transition` declaration covering every animated property
    pub fn transition(&self, delay: f64) -> String {
        let timing = format!(
            "{}s {} {}s",
            css_number(self.duration),
            self.ease.css(),
            css_number(delay.max(0.0))
        );
        let list = self
            .css_properties()
            .into_iter()
            .map(|name| format!("{} {}", name, timing))
            .collect::<Vec<_>>()
            .join(", ");
        format!("transition: {};", list)
    }

    /// Inline style for the played (`active`) or reversed state.
    ///
    /// Reversal runs immediately, without the forward stagger delay.
    pub fn style(&self, active: bool, delay: f64) -> String {
        if active {
            format!("{} {}", self.from.merge(&self.to).to_css(), self.transition(delay))
        } else {
            format!("{} {}", self.from.to_css(), self.transition(0.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_number_formatting() {
        assert_eq!(css_number(0.0), "0");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(1.2), "1.2");
        assert_eq!(css_number(0.1 * 3.0), "0.3");
        assert_eq!(css_number(-60.0), "-60");
    }

    #[test]
    fn test_props_to_css() {
        let props = Props::new().opacity(0.0).y(50.0).blur(10.0);
        assert_eq!(
            props.to_css(),
            "opacity: 0; transform: translate3d(0px, 50px, 0px); filter: blur(10px);"
        );
    }

    #[test]
    fn test_transform_order() {
        let props = Props::new().x(-100.0).scale(0.8).rotate_y(-15.0);
        assert_eq!(
            props.transform().as_deref(),
            Some("translate3d(-100px, 0px, 0px) scale(0.8) rotateY(-15deg)")
        );
        assert_eq!(Props::new().opacity(1.0).transform(), None);
    }

    #[test]
    fn test_transition_lists_union_of_properties() {
        let tween = Tween::new(Props::new().opacity(0.0).x(-60.0), Props::new().opacity(1.0).x(0.0))
            .duration(1.2)
            .ease(Ease::Power2Out);
        assert_eq!(
            tween.transition(0.3),
            "transition: opacity 1.2s cubic-bezier(0.33, 1, 0.68, 1) 0.3s, \
             transform 1.2s cubic-bezier(0.33, 1, 0.68, 1) 0.3s;"
        );
    }

    #[test]
    fn test_style_reverse_drops_delay() {
        let tween = Tween::new(Props::new().opacity(0.0), Props::new().opacity(1.0)).ease(Ease::Linear);
        assert_eq!(
            tween.style(true, 0.4),
            "opacity: 1; transition: opacity 0.5s linear 0.4s;"
        );
        assert_eq!(
            tween.style(false, 0.4),
            "opacity: 0; transition: opacity 0.5s linear 0s;"
        );
    }
}
