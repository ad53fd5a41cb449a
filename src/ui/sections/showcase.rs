use leptos::html;
use leptos::prelude::*;

use crate::core::content::{Showcase, ShowcaseEntry};
use crate::core::motion::{Ease, Props, SCRUB_SMOOTHING, ScrollTrigger, Stagger, Tween, css_number};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_pin_scrub, use_scroll_trigger};

const TITLE_IN: Tween = Tween::new(Props::new().opacity(0.0).y(50.0), Props::new().opacity(1.0).y(0.0))
    .duration(1.0)
    .ease(Ease::Power2Out);

const CARD_IN: Tween = Tween::new(
    Props::new().opacity(0.0).y(60.0).scale(0.9),
    Props::new().opacity(1.0).y(0.0).scale(1.0),
)
.duration(0.8)
.ease(Ease::Power2Out);
const CARD_STAGGER: Stagger = Stagger::each(0.2);

/// Inline style for the carousel track
fn track_style(pinned: bool, offset: f64) -> String {
    if !pinned {
        return "width: auto;".to_string();
    }
    format!(
        "width: max-content; transform: translate3d({}px, 0px, 0px); transition: transform {}s {};",
        css_number(offset),
        css_number(SCRUB_SMOOTHING),
        Ease::Power1Out.css()
    )
}

/// Titled horizontal carousel of cards: projects, achievements or activities.
///
/// On wide viewports the section pins while vertical scrolling drives the
/// track sideways; otherwise the track is a plain scrollable row.
#[component]
pub fn ShowcaseSection(kind: Showcase) -> impl IntoView {
    let title_ref = NodeRef::<html::Div>::new();
    let pin_ref = NodeRef::<html::Div>::new();
    let track_ref = NodeRef::<html::Div>::new();

    let title_seen = use_scroll_trigger(title_ref, ScrollTrigger::at(80.0));
    let cards_seen = use_scroll_trigger(track_ref, ScrollTrigger::at(80.0));
    let pin = use_pin_scrub(pin_ref, track_ref);

    let pinned = move || pin.geometry.with(Option::is_some);
    let (lead, highlight) = kind.heading();
    let entries = kind.entries();
    let delays = CARD_STAGGER.delays(entries.len());

    view! {
        <section id=kind.section().anchor() class="py-20 lg:py-32 overflow-x-clip">
            <div
                node_ref=pin_ref
                style=move || {
                    pin.geometry
                        .get()
                        .map(|g| format!("height: {}px;", css_number(g.pinned_height())))
                        .unwrap_or_default()
                }
            >
                <div
                    class="flex flex-col justify-center"
                    class=("sticky", pinned)
                    class=("top-0", pinned)
                    class=("h-screen", pinned)
                    class=("overflow-hidden", pinned)
                >
                    <div node_ref=title_ref class="container mx-auto px-6 mb-16">
                        <h2
                            class="text-4xl md:text-5xl font-bold text-center"
                            style=move || TITLE_IN.style(title_seen.get(), 0.0)
                        >
                            {lead}
                            <span class="text-gradient">{highlight}</span>
                        </h2>
                    </div>

                    <div
                        node_ref=track_ref
                        class="flex lg:space-x-8 space-x-4 px-6 lg:flex-row lg:snap-x lg:snap-mandatory"
                        class=("overflow-x-auto", move || !pinned())
                        style=move || track_style(pinned(), pin.offset.get())
                    >
                        {entries
                            .iter()
                            .zip(delays)
                            .map(|(entry, delay)| {
                                view! {
                                    <ShowcaseCard entry=*entry kind=kind revealed=cards_seen delay=delay />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ShowcaseCard(entry: ShowcaseEntry, kind: Showcase, revealed: ReadSignal<bool>, delay: f64) -> impl IntoView {
    let title_class = match kind {
        Showcase::Projects => "text-2xl font-bold text-gradient",
        _ => "text-xl font-semibold text-gradient",
    };
    let (link_label, source) = if kind.shows_source() {
        ("Live Demo", entry.source_url)
    } else {
        ("View", None)
    };
    let target = kind.opens_new_tab().then_some("_blank");
    let rel = kind.opens_new_tab().then_some("noopener noreferrer");

    view! {
        <div class="flex-shrink-0 lg:snap-start" style=move || CARD_IN.style(revealed.get(), delay)>
            <div class="project-card group relative w-80 lg:w-96 h-[400px] glass rounded-2xl overflow-hidden card-hover">
                <div class="relative h-36 overflow-hidden">
                    <img
                        src=entry.image
                        alt=entry.title
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-transparent"></div>
                </div>

                <div class="p-6 space-y-4">
                    <h3 class=title_class>{entry.title}</h3>
                    {entry.description.map(|text| {
                        view! { <p class="text-muted-foreground leading-relaxed">{text}</p> }
                    })}
                    <div class="flex flex-wrap gap-2">
                        {entry
                            .tags
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-0 text-xs bg-secondary rounded-full text-secondary-foreground">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex space-x-4 pt-4">
                        <a
                            href=entry.live_url
                            target=target
                            rel=rel
                            class="flex items-center space-x-2 btn-ghost flex-1 justify-center"
                        >
                            <Icon name=icons::ARROW_UP_RIGHT class="w-4 h-4" />
                            <span>{link_label}</span>
                        </a>
                        {source.map(|href| {
                            view! {
                                <a href=href class="flex items-center space-x-2 btn-ghost flex-1 justify-center">
                                    <Icon name=icons::GITHUB class="w-4 h-4" />
                                    <span>"Code"</span>
                                </a>
                            }
                        })}
                    </div>
                </div>

                <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none">
                    <div class="absolute inset-0 bg-gradient-to-r from-neon-blue/10 to-neon-purple/10 rounded-2xl"></div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpinned_track_is_static() {
        assert_eq!(track_style(false, -500.0), "width: auto;");
    }

    #[test]
    fn test_pinned_track_follows_offset() {
        let css = track_style(true, -1720.0);
        assert!(css.starts_with("width: max-content;"));
        assert!(css.contains("translate3d(-1720px, 0px, 0px)"));
        assert!(css.contains("transition: transform 1s"));
    }

    #[test]
    fn test_card_stagger_covers_every_entry() {
        for kind in Showcase::ALL {
            let delays = CARD_STAGGER.delays(kind.entries().len());
            assert_eq!(delays.len(), kind.entries().len());
            assert_eq!(delays[0], 0.0);
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render(kind: Showcase) -> String {
        Owner::new().with(|| view! { <ShowcaseSection kind=kind /> }.to_html())
    }

    /// Rendered markup of each card, in document order
    fn cards(html: &str) -> Vec<&str> {
        html.split("project-card").skip(1).collect()
    }

    #[test]
    fn test_one_card_per_entry_in_declared_order() {
        for kind in Showcase::ALL {
            let html = render(kind);
            let cards = cards(&html);
            assert_eq!(cards.len(), kind.entries().len(), "{kind:?}");

            for (card, entry) in cards.iter().zip(kind.entries()) {
                assert!(card.contains(&format!(">{}</h3>", entry.title)), "{}", entry.title);
            }
        }
    }

    #[test]
    fn test_tags_render_in_declared_order() {
        for kind in Showcase::ALL {
            let html = render(kind);
            for (card, entry) in cards(&html).iter().zip(kind.entries()) {
                let mut from = 0;
                for tag in entry.tags {
                    let at = card[from..]
                        .find(&format!(">{tag}</span>"))
                        .unwrap_or_else(|| panic!("{}: tag {tag} missing or out of order", entry.title));
                    from += at + 1;
                }
            }
        }
    }

    #[test]
    fn test_code_link_only_with_source() {
        let html = render(Showcase::Projects);
        for (card, entry) in cards(&html).iter().zip(Showcase::Projects.entries()) {
            assert_eq!(card.contains("<span>Code</span>"), entry.source_url.is_some());
            assert!(card.contains("<span>Live Demo</span>"));
        }

        for kind in [Showcase::Achievements, Showcase::Activities] {
            let html = render(kind);
            assert!(!html.contains("<span>Code</span>"), "{kind:?}");
            assert_eq!(html.matches("<span>View</span>").count(), kind.entries().len());
        }
    }

    #[test]
    fn test_only_certificates_open_in_new_tab() {
        let achievements = render(Showcase::Achievements);
        assert_eq!(
            achievements.matches("target=\"_blank\"").count(),
            Showcase::Achievements.entries().len()
        );
        assert!(!render(Showcase::Activities).contains("_blank"));
    }
}
