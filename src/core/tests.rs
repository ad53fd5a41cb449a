#[cfg(test)]
mod tests {
    use crate::core::content::Showcase;
    use crate::core::contact::{ContactFlow, ContactForm, Field, FieldError, SubmitError, SubmitState};
    use crate::core::loading::{LoadingGate, ScrollLock};
    use crate::core::navigation::{
        FOOTER_LINKS, MenuState, NAV_LINKS, SectionId, SectionScroller, scroll_to,
    };
    use std::cell::{Cell, RefCell};

    /// Page stand-in: a set of element ids plus a record of scroll calls
    struct Page {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl Page {
        fn full() -> Self {
            Self {
                ids: SectionId::ALL.iter().map(|id| id.anchor()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                ids: Vec::new(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl SectionScroller for Page {
        fn scroll_into_view(&self, anchor: &str) -> bool {
            let found = self.ids.contains(&anchor);
            if found {
                self.scrolled.borrow_mut().push(anchor.to_string());
            }
            found
        }
    }

    #[derive(Default)]
    struct BodyOverflow {
        hidden: Cell<bool>,
    }

    impl ScrollLock for &BodyOverflow {
        fn lock(&self) {
            self.hidden.set(true);
        }

        fn unlock(&self) {
            self.hidden.set(false);
        }
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[test]
    fn test_empty_submit_shows_message_per_field() {
        let mut flow = ContactFlow::new();
        let form = ContactForm::default();

        let Err(SubmitError::Invalid(errors)) = flow.begin(&form) else {
            panic!("empty form must be rejected");
        };
        let messages = Field::ALL
            .iter()
            .filter_map(|f| errors.get(*f))
            .map(|e| e.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            ["Name is required", "Email is required", "Message is required"]
        );
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        let mut flow = ContactFlow::new();
        let form = ContactForm {
            name: "Rohit".to_string(),
            email: "rohit.example.com".to_string(),
            message: "Hi".to_string(),
        };

        match flow.begin(&form) {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(errors.get(Field::Email), Some(FieldError::EmailInvalid));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_valid_submit_runs_once_then_clears() {
        let mut flow = ContactFlow::new();
        let mut form = ContactForm::default();
        form.set(Field::Name, "Rohit");
        form.set(Field::Email, "rohit@example.com");
        form.set(Field::Message, "Let's build something");

        assert!(flow.begin(&form).is_ok());
        assert!(flow.is_submitting());
        assert_eq!(flow.begin(&form), Err(SubmitError::InFlight));

        assert!(flow.complete(&mut form));
        assert!(!flow.is_submitting());
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Message), "");
    }

    // ========================================================================
    // Loading gate
    // ========================================================================

    #[test]
    fn test_loading_gate_opens_once_and_restores_scroll() {
        let body = BodyOverflow::default();
        let mut gate = LoadingGate::new(&body);
        assert!(body.hidden.get());

        let mut callbacks = 0;
        for _ in 0..3 {
            if gate.finish() {
                callbacks += 1;
            }
        }
        assert_eq!(callbacks, 1);
        assert!(gate.content_visible());
        assert!(!body.hidden.get());
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_every_nav_link_resolves() {
        let page = Page::full();
        for link in NAV_LINKS.iter().chain(&FOOTER_LINKS) {
            assert!(scroll_to(&page, link.target), "{} did not resolve", link.label);
        }
        assert_eq!(page.scrolled.borrow().len(), NAV_LINKS.len() + FOOTER_LINKS.len());
    }

    #[test]
    fn test_missing_anchor_is_silent() {
        let page = Page::empty();
        let mut menu = MenuState { open: true };
        for link in NAV_LINKS {
            assert!(!menu.navigate(&page, link.target));
        }
        assert!(menu.open);
    }

    // ========================================================================
    // Content
    // ========================================================================

    #[test]
    fn test_showcase_anchors_are_sections() {
        for showcase in Showcase::ALL {
            let anchor = showcase.section().anchor();
            assert_eq!(anchor.parse::<SectionId>(), Ok(showcase.section()));
        }
    }
}
