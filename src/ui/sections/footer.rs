use leptos::html;
use leptos::prelude::*;

use crate::core::content::PROFILE;
use crate::core::motion::{Ease, Props, ScrollTrigger, Stagger, StaggerFrom, Tween};
use crate::core::navigation::{FOOTER_LINKS, START_PROJECT};
use crate::core::particles::{FOOTER_PARTICLES, FOOTER_SEED, Particle, scatter};
use crate::ui::dom;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::use_scroll_trigger;

const FOOTER_IN: Tween = Tween::new(
    Props::new().opacity(0.0).y(60.0).blur(10.0),
    Props::new().opacity(1.0).y(0.0).blur(0.0),
)
.duration(1.2)
.ease(Ease::Power2Out);

const PARTICLE_STAGGER: Stagger = Stagger::amount(2.0, StaggerFrom::Random { seed: FOOTER_SEED });

/// Scattered particles whose float cycles start in shuffled order
fn footer_particles() -> Vec<Particle> {
    let delays = PARTICLE_STAGGER.delays(FOOTER_PARTICLES);
    scatter(FOOTER_PARTICLES, FOOTER_SEED, 0.0)
        .into_iter()
        .zip(delays)
        .map(|(particle, delay)| Particle { delay, ..particle })
        .collect()
}

#[component]
pub fn Footer() -> impl IntoView {
    let body_ref = NodeRef::<html::Div>::new();
    let seen = use_scroll_trigger(body_ref, ScrollTrigger::at(90.0));

    view! {
        <footer class="relative border-t border-border/30 overflow-hidden">
            <div
                node_ref=body_ref
                class="relative py-16"
                style=move || FOOTER_IN.style(seen.get(), 0.0)
            >
                <div class="absolute inset-0 pointer-events-none">
                    {footer_particles()
                        .into_iter()
                        .map(|p| {
                            view! {
                                <div
                                    class="footer-particle absolute w-2 h-2 bg-neon-blue/20 rounded-full blur-sm"
                                    style=p.style()
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="container mx-auto px-6 relative z-10">
                    <div class="grid md:grid-cols-3 gap-8 items-center">
                        <div class="space-y-4">
                            <div class="text-2xl font-bold text-gradient">{PROFILE.name}</div>
                            <p class="text-sm text-muted-foreground">
                                {format!("\u{a9} 2025 {}. All rights reserved.", PROFILE.name)}
                            </p>
                            <p class="text-xs text-muted-foreground flex items-center space-x-1">
                                <span>"Made with"</span>
                                <Icon name=icons::HEART class="w-3 h-3 text-red-400" filled=true />
                                <span>"and lots of caffeine"</span>
                            </p>
                        </div>

                        <div class="flex flex-wrap justify-center gap-6">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| {
                                    let target = link.target;
                                    view! {
                                        <button
                                            class="text-sm text-muted-foreground hover:text-primary transition-colors duration-300"
                                            on:click=move |_| dom::go_to(target)
                                        >
                                            {link.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="text-center md:text-right">
                            <button class="btn-ghost px-6 py-3" on:click=move |_| dom::go_to(START_PROJECT.target)>
                                {START_PROJECT.label}
                            </button>
                        </div>
                    </div>

                    <div class="mt-12 pt-8 border-t border-border/20 text-center">
                        <p class="text-xs text-muted-foreground">
                            "Built with Rust, Leptos, and an unhealthy amount of attention to detail."
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_delays_spread_over_two_seconds() {
        let particles = footer_particles();
        assert_eq!(particles.len(), FOOTER_PARTICLES);

        let mut delays: Vec<f64> = particles.iter().map(|p| p.delay).collect();
        delays.sort_by(f64::total_cmp);
        assert_eq!(delays[0], 0.0);
        assert!((delays[FOOTER_PARTICLES - 1] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_particles_match_between_renders() {
        assert_eq!(footer_particles(), footer_particles());
    }
}
