//! Section anchors and in-page navigation

use std::fmt;
use std::str::FromStr;

use super::motion::{Ease, Props, Tween};

/// Anchored sections of the page, in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Achievements,
    Activities,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Activities,
        SectionId::Contact,
    ];

    /// DOM id of the section element
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Achievements => "achievements",
            SectionId::Activities => "activities",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == anchor)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

const fn link(label: &'static str, target: SectionId) -> NavLink {
    NavLink { label, target }
}

/// Links in the top bar, in display order
pub const NAV_LINKS: [NavLink; 6] = [
    link("Home", SectionId::Hero),
    link("About", SectionId::About),
    link("Projects", SectionId::Projects),
    link("Achievements", SectionId::Achievements),
    link("Activities", SectionId::Activities),
    link("Contact", SectionId::Contact),
];

/// Quick links in the footer
pub const FOOTER_LINKS: [NavLink; 4] = [
    link("Home", SectionId::Hero),
    link("About", SectionId::About),
    link("Projects", SectionId::Projects),
    link("Contact", SectionId::Contact),
];

pub const HIRE_ME: NavLink = link("Hire Me", SectionId::Contact);
pub const START_PROJECT: NavLink = link("Start a Project", SectionId::Contact);

/// Scroll offset past which the bar switches to its solid style, in px
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

/// Mobile menu drop-in; played while the menu is open
pub const MENU_REVEAL: Tween = Tween::new(Props::new().opacity(0.0).y(-20.0), Props::new().opacity(1.0).y(0.0))
    .duration(0.3)
    .ease(Ease::Power2Out);

/// Something that can bring an anchored element into view.
///
/// Returns `false` when nothing with that id exists.
pub trait SectionScroller {
    fn scroll_into_view(&self, anchor: &str) -> bool;
}

pub fn scroll_to<S: SectionScroller + ?Sized>(scroller: &S, target: SectionId) -> bool {
    scroller.scroll_into_view(target.anchor())
}

/// Mobile menu open/closed state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Scroll to `target`; the menu closes only when the section was found
    pub fn navigate<S: SectionScroller + ?Sized>(&mut self, scroller: &S, target: SectionId) -> bool {
        let found = scroll_to(scroller, target);
        if found {
            self.open = false;
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeScroller {
        present: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl SectionScroller for FakeScroller {
        fn scroll_into_view(&self, anchor: &str) -> bool {
            if self.present.contains(&anchor) {
                self.scrolled.borrow_mut().push(anchor.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_anchor_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse::<SectionId>(), Ok(id));
        }
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_nav_links_order() {
        let labels = NAV_LINKS.iter().map(|l| l.label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            ["Home", "About", "Projects", "Achievements", "Activities", "Contact"]
        );
        assert_eq!(HIRE_ME.target, SectionId::Contact);
        assert_eq!(START_PROJECT.target, SectionId::Contact);
    }

    #[test]
    fn test_menu_closes_on_found_target() {
        let scroller = FakeScroller {
            present: vec!["about"],
            scrolled: RefCell::new(Vec::new()),
        };
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.open);

        assert!(menu.navigate(&scroller, SectionId::About));
        assert!(!menu.open);
        assert_eq!(*scroller.scrolled.borrow(), vec!["about".to_string()]);
    }

    #[test]
    fn test_menu_stays_open_on_missing_target() {
        let scroller = FakeScroller {
            present: vec![],
            scrolled: RefCell::new(Vec::new()),
        };
        let mut menu = MenuState { open: true };
        assert!(!menu.navigate(&scroller, SectionId::Projects));
        assert!(menu.open);
        assert!(scroller.scrolled.borrow().is_empty());
    }
}
