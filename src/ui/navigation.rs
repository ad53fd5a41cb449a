use leptos::prelude::*;

use crate::core::content::PROFILE;
use crate::core::navigation::{HIRE_ME, MENU_REVEAL, MenuState, NAV_LINKS, SectionId};
use crate::ui::dom::DocumentScroller;

/// Fixed top bar with section links and a collapsible mobile menu
#[component]
pub fn Navigation() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::navigation::is_scrolled;
        use crate::ui::dom;

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let next = is_scrolled(dom::scroll_y());
            if scrolled.get_untracked() != next {
                set_scrolled.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = set_scrolled;

    let navigate = move |target: SectionId| {
        let found = menu.try_update(|m| m.navigate(&DocumentScroller, target)).unwrap_or(false);
        if !found {
            leptos::logging::log!("section #{} not on page", target);
        }
    };
    let is_open = move || menu.with(|m| m.open);

    view! {
        <nav
            class="fixed top-0 left-0 w-full z-50 transition-all duration-300"
            class=("glass", move || scrolled.get())
            class=("backdrop-blur-xl", move || scrolled.get())
            class=("py-4", move || scrolled.get())
            class=("py-6", move || !scrolled.get())
        >
            <div class="container mx-auto px-6 flex items-center justify-between">
                <button
                    class="text-2xl font-bold text-gradient cursor-pointer"
                    on:click=move |_| navigate(SectionId::Hero)
                >
                    {PROFILE.name}
                </button>

                // Desktop
                <div class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let target = link.target;
                            view! {
                                <button
                                    class="text-foreground hover:text-primary transition-colors duration-300 font-light tracking-wider"
                                    on:click=move |_| navigate(target)
                                >
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn-hero" on:click=move |_| navigate(HIRE_ME.target)>
                        {HIRE_ME.label}
                    </button>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden text-foreground"
                    on:click=move |_| menu.update(|m| m.toggle())
                    aria-label="Toggle menu"
                    aria-expanded=move || is_open().to_string()
                >
                    <div class="w-6 h-6 flex flex-col justify-center items-center">
                        <span
                            class="block h-0.5 w-6 bg-current transition-all duration-300"
                            class=("rotate-45", is_open)
                            class=("translate-y-1", is_open)
                            class=("-translate-y-1", move || !is_open())
                        ></span>
                        <span
                            class="block h-0.5 w-6 bg-current transition-all duration-300"
                            class=("opacity-0", is_open)
                        ></span>
                        <span
                            class="block h-0.5 w-6 bg-current transition-all duration-300"
                            class=("-rotate-45", is_open)
                            class=("-translate-y-1", is_open)
                            class=("translate-y-1", move || !is_open())
                        ></span>
                    </div>
                </button>
            </div>

            // Mobile menu
            <div
                class="md:hidden absolute top-full left-0 w-full glass backdrop-blur-xl"
                class=("pointer-events-none", move || !is_open())
                style=move || MENU_REVEAL.style(is_open(), 0.0)
                aria-hidden=move || (!is_open()).to_string()
            >
                <div class="container mx-auto px-6 py-6 flex flex-col space-y-4">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let target = link.target;
                            view! {
                                <button
                                    class="text-foreground hover:text-primary transition-colors duration-300 font-light tracking-wider text-left"
                                    on:click=move |_| navigate(target)
                                >
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn-hero w-fit" on:click=move |_| navigate(HIRE_ME.target)>
                        {HIRE_ME.label}
                    </button>
                </div>
            </div>
        </nav>
    }
}
