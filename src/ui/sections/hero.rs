use leptos::prelude::*;

use crate::core::content::{HERO_SCENE_TITLE, HERO_SCENE_URL, PROFILE};
use crate::core::motion::{Ease, Position, Props, Stagger, Timeline, Tween};
use crate::core::navigation::{HIRE_ME, SectionId};
use crate::ui::dom;
use crate::ui::motion::{Hover, use_mount_intro};

const TEXT_FROM: Props = Props::new().opacity(0.0).y(50.0).blur(10.0);
const TEXT_TO: Props = Props::new().opacity(1.0).y(0.0).blur(0.0);

const HEADLINE: Tween = Tween::new(TEXT_FROM, TEXT_TO).duration(1.2).ease(Ease::Power2Out);
const SUBTITLE: Tween = Tween::new(TEXT_FROM, TEXT_TO).duration(1.0).ease(Ease::Power2Out);
const CTA: Tween = Tween::new(TEXT_FROM, TEXT_TO).duration(0.8).ease(Ease::Power2Out);
const SCENE: Tween = Tween::new(Props::new().opacity(0.0).x(100.0), Props::new().opacity(1.0).x(0.0))
    .duration(1.5)
    .ease(Ease::Power2Out);

const CTA_HOVER: Tween = Tween::new(Props::new().scale(1.0), Props::new().scale(1.05))
    .duration(0.3)
    .ease(Ease::Power2Out);

/// Background orbs: colour and placement classes
const ORBS: [&str; 3] = [
    "top-1/4 left-1/4 w-32 h-32 bg-neon-blue/20",
    "top-1/3 right-1/4 w-24 h-24 bg-neon-purple/20",
    "bottom-1/4 left-1/3 w-28 h-28 bg-neon-cyan/20",
];
const ORB_STAGGER: Stagger = Stagger::each(0.5);

fn intro_timeline() -> Timeline {
    Timeline::with_delay(0.5)
        .then("headline", HEADLINE.duration, Position::AfterPrevious)
        .then("subtitle", SUBTITLE.duration, Position::Overlap(0.8))
        .then("cta", CTA.duration, Position::Overlap(0.6))
        .then("scene", SCENE.duration, Position::Overlap(1.0))
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let started = use_mount_intro();
    let hover = Hover::new();

    let timeline = intro_timeline();
    let at = move |label: &str| timeline.start_of(label).unwrap_or_default();
    let (headline_at, subtitle_at, cta_at, scene_at) =
        (at("headline"), at("subtitle"), at("cta"), at("scene"));

    let orb_delays = ORB_STAGGER.delays(ORBS.len());

    view! {
        <section
            id=SectionId::Hero.anchor()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none">
                {ORBS
                    .iter()
                    .zip(orb_delays)
                    .map(|(placement, delay)| {
                        view! {
                            <div
                                class=format!("glow-orb absolute rounded-full blur-3xl {placement}")
                                style=format!("animation-delay: {delay}s;")
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center relative z-10">
                <div class="space-y-8">
                    <h1
                        class="text-5xl md:text-7xl font-bold leading-tight"
                        style=move || HEADLINE.style(started.get(), headline_at)
                    >
                        "Hi, I'm "
                        <span class="text-gradient">{PROFILE.name}</span>
                        " \u{2013} "
                        {PROFILE.role}
                    </h1>
                    <p
                        class="text-xl md:text-2xl text-muted-foreground font-light leading-relaxed"
                        style=move || SUBTITLE.style(started.get(), subtitle_at)
                    >
                        "Building immersive digital experiences with cutting-edge technology. "
                        "Transforming ideas into interactive realities. "
                        "Solving real-world problems with innovative solutions."
                    </p>
                    <div style=move || CTA.style(started.get(), cta_at)>
                        <button
                            class="btn-hero text-lg px-8 py-4 animate-pulse-glow"
                            style=move || CTA_HOVER.style(hover.get(), 0.0)
                            on:mouseenter=move |_| hover.enter()
                            on:mouseleave=move |_| hover.leave()
                            on:click=move |_| dom::go_to(HIRE_ME.target)
                        >
                            {HIRE_ME.label}
                        </button>
                    </div>
                </div>

                <div
                    class="relative h-[400px] md:h-[600px] w-full"
                    style=move || SCENE.style(started.get(), scene_at)
                >
                    <iframe
                        src=HERO_SCENE_URL
                        title=HERO_SCENE_TITLE
                        width="100%"
                        height="100%"
                        class="rounded-lg border-0"
                    ></iframe>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intro_overlaps() {
        let tl = intro_timeline();
        assert!(close(tl.start_of("headline").unwrap(), 0.5));
        assert!(close(tl.start_of("subtitle").unwrap(), 0.9));
        assert!(close(tl.start_of("cta").unwrap(), 1.3));
        assert!(close(tl.start_of("scene").unwrap(), 1.1));
        assert!(close(tl.duration(), 2.6));
    }

    #[test]
    fn test_text_starts_hidden_and_blurred() {
        let css = HEADLINE.style(false, 0.0);
        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("blur(10px)"));
    }

    #[test]
    fn test_scene_iframe_is_borderless() {
        let html = Owner::new().with(|| view! { <HeroSection /> }.to_html());
        assert!(html.contains(&format!(r#"src="{HERO_SCENE_URL}""#)));
        assert!(html.contains(&format!(r#"title="{HERO_SCENE_TITLE}""#)));
        assert!(html.contains("rounded-lg border-0"));
        assert!(!html.contains("frameborder"));
    }
}
