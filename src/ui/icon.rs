use leptos::prelude::*;

/// Inline stroke icon on a 24x24 grid, coloured with `currentColor`
#[component]
pub fn Icon(
    /// Icon name, one of `icons::*`
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
    /// Fill the shape instead of stroking it
    #[prop(default = false)]
    filled: bool,
) -> impl IntoView {
    let d = icons::path(name).unwrap_or_default();
    let (fill, stroke) = if filled {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill=fill
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=d />
        </svg>
    }
}

/// Icon names and their path data
pub mod icons {
    pub const GITHUB: &str = "github";
    pub const LINKEDIN: &str = "linkedin";
    pub const TWITTER: &str = "twitter";
    pub const ARROW_UP_RIGHT: &str = "arrow-up-right";
    pub const SEND: &str = "send";
    pub const HEART: &str = "heart";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const FILE_HTML: &str = "file-html";
    pub const FILE_CSS: &str = "file-css";
    pub const FILE_JS: &str = "file-js";
    pub const FILE_CODE: &str = "file-code";
    pub const LEAF: &str = "leaf";
    pub const PALETTE: &str = "palette";
    pub const DATABASE: &str = "database";
    pub const GLOBE: &str = "globe";

    pub fn path(name: &str) -> Option<&'static str> {
        let d = match name {
            GITHUB => {
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"
            }
            LINKEDIN => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z M2 9h4v12H2z M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z"
            }
            TWITTER => {
                "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"
            }
            ARROW_UP_RIGHT => "M7 17L17 7 M7 7h10v10",
            SEND => "M22 2L11 13 M22 2l-7 20-4-9-9-4 20-7z",
            HEART => {
                "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"
            }
            ALERT_CIRCLE => "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M12 8v4 M12 16h.01",
            FILE_HTML => concat!(
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6",
                " M9 13l-2 2 2 2 M15 13l2 2-2 2"
            ),
            FILE_CSS => concat!(
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6",
                " M10 12.5a1.5 1.5 0 1 0 0 3 M10 15.5a1.5 1.5 0 1 0 0 3 M14 13h2 M14 17h2"
            ),
            FILE_JS => concat!(
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6",
                " M10 12v5a1 1 0 0 1-2 0 M16 13h-1.5a1 1 0 0 0 0 2h1a1 1 0 0 1 0 2H14"
            ),
            FILE_CODE => concat!(
                "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6",
                " M10 13l-2 2 2 2 M14 13l2 2-2 2"
            ),
            LEAF => "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10z M2 21c0-3 1.85-5.36 5.08-6",
            PALETTE => {
                "M12 2a10 10 0 0 0 0 20c1.1 0 2-.9 2-2 0-.5-.2-1-.5-1.3-.3-.4-.5-.8-.5-1.3 0-1.1.9-2 2-2h2.4A5.6 5.6 0 0 0 22 10c0-4.4-4.5-8-10-8z M7.5 11.5h.01 M10.5 7.5h.01 M15.5 7.5h.01"
            }
            DATABASE => {
                "M12 2C7 2 3 3.34 3 5s4 3 9 3 9-1.34 9-3-4-3-9-3z M21 12c0 1.66-4 3-9 3s-9-1.34-9-3 M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"
            }
            GLOBE => {
                "M12 2a10 10 0 1 0 0 20 10 10 0 1 0 0-20z M2 12h20 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"
            }
            _ => return None,
        };
        Some(d)
    }
}

#[cfg(test)]
mod tests {
    use super::icons;
    use crate::core::content::{SKILLS, SOCIAL_LINKS};

    #[test]
    fn test_content_icons_resolve() {
        for name in SKILLS.iter().map(|s| s.icon).chain(SOCIAL_LINKS.iter().map(|l| l.icon)) {
            assert!(icons::path(name).is_some(), "missing icon {name}");
        }
    }

    #[test]
    fn test_file_icons_share_outline() {
        for name in [icons::FILE_HTML, icons::FILE_CSS, icons::FILE_JS, icons::FILE_CODE] {
            assert!(icons::path(name).unwrap().starts_with("M14 2H6"));
        }
        assert_eq!(icons::path("nope"), None);
    }
}
