use leptos::html;
use leptos::prelude::*;

use crate::core::content::{PROFILE, PROFILE_IMAGE, SKILLS};
use crate::core::motion::{Ease, Props, ScrollTrigger, Stagger, Tween};
use crate::core::navigation::SectionId;
use crate::ui::icon::Icon;
use crate::ui::motion::{Hover, use_scroll_trigger};

const SECTION_CLEAR: Tween = Tween::new(
    Props::new().opacity(0.0).blur(10.0),
    Props::new().opacity(1.0).blur(0.0),
)
.duration(1.5)
.ease(Ease::Power2Out);

const IMAGE_IN: Tween = Tween::new(
    Props::new().opacity(0.0).x(-100.0).rotate_y(-15.0),
    Props::new().opacity(1.0).x(0.0).rotate_y(0.0),
)
.duration(1.2)
.ease(Ease::Power2Out);

const CONTENT_IN: Tween = Tween::new(Props::new().opacity(0.0).x(100.0), Props::new().opacity(1.0).x(0.0))
    .duration(1.2)
    .ease(Ease::Power2Out);

const SKILL_IN: Tween = Tween::new(
    Props::new().opacity(0.0).y(30.0).scale(0.8),
    Props::new().opacity(1.0).y(0.0).scale(1.0),
)
.duration(0.6)
.ease(Ease::BackOut(1.7));
const SKILL_STAGGER: Stagger = Stagger::each(0.1);

const IMAGE_HOVER: Tween = Tween::new(
    Props::new().rotate_y(0.0).scale(1.0),
    Props::new().rotate_y(5.0).scale(1.05),
)
.duration(0.4)
.ease(Ease::Power2Out);

/// Profile picture, bio and skill grid
#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let image_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let skills_ref = NodeRef::<html::Div>::new();

    let section_seen = use_scroll_trigger(section_ref, ScrollTrigger::at(80.0).ending_at(20.0));
    let image_seen = use_scroll_trigger(image_ref, ScrollTrigger::at(80.0));
    let content_seen = use_scroll_trigger(content_ref, ScrollTrigger::at(80.0));
    let skills_seen = use_scroll_trigger(skills_ref, ScrollTrigger::at(80.0));

    let hover = Hover::new();
    let skill_delays = SKILL_STAGGER.delays(SKILLS.len());

    view! {
        <section id=SectionId::About.anchor() class="py-20 lg:py-32 relative overflow-hidden">
            <div
                node_ref=section_ref
                class="container mx-auto px-6"
                style=move || SECTION_CLEAR.style(section_seen.get(), 0.0)
            >
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div
                        node_ref=image_ref
                        class="relative"
                        style=move || IMAGE_IN.style(image_seen.get(), 0.0)
                    >
                        <div
                            class="relative w-64 h-64 sm:w-72 sm:h-72 lg:w-80 lg:h-80 mx-auto"
                            style=move || IMAGE_HOVER.style(hover.get(), 0.0)
                            on:mouseenter=move |_| hover.enter()
                            on:mouseleave=move |_| hover.leave()
                        >
                            <div class="absolute inset-0 rounded-full bg-gradient-to-br from-neon-blue to-neon-purple p-1 glow-primary">
                                <div class="w-full h-full rounded-full overflow-hidden bg-background">
                                    <img
                                        src=PROFILE_IMAGE
                                        alt=format!("{} Profile", PROFILE.name)
                                        class="w-full h-full object-cover"
                                    />
                                </div>
                            </div>
                            <div class="absolute -inset-4 rounded-full bg-gradient-to-r from-neon-cyan/20 to-neon-pink/20 blur-xl animate-pulse-glow"></div>
                        </div>
                    </div>

                    <div
                        node_ref=content_ref
                        class="space-y-8"
                        style=move || CONTENT_IN.style(content_seen.get(), 0.0)
                    >
                        <div class="space-y-6">
                            <h2 class="text-4xl md:text-5xl font-bold">
                                "About " <span class="text-gradient">"Me"</span>
                            </h2>
                            <p class="text-lg text-muted-foreground leading-relaxed">
                                "I'm a passionate full-stack developer, completing my B.Tech in AI and Data Science. "
                                "I specialize in the MERN stack and deep AI frameworks. I'm driven by tangible results. "
                                "I engineer scalable backends and create impactful applications. "
                                "I am dedicated to continuous growth, pushing boundaries with every project."
                            </p>
                            <p class="text-lg text-muted-foreground leading-relaxed">
                                "My expertise spans from front-end design and animations to robust backend solutions. "
                                "I'm constantly exploring new technologies and pushing the boundaries of what's possible on the web."
                            </p>
                        </div>

                        <div node_ref=skills_ref class="space-y-4">
                            <h3 class="text-2xl font-semibold text-gradient">"Skills & Technologies"</h3>
                            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4 lg:gap-6">
                                {SKILLS
                                    .iter()
                                    .zip(skill_delays)
                                    .map(|(skill, delay)| {
                                        view! {
                                            <div
                                                class="skill-icon group cursor-pointer"
                                                style=move || SKILL_IN.style(skills_seen.get(), delay)
                                            >
                                                <div class="glass p-3 lg:p-4 rounded-xl text-center hover:glow-secondary transition-all duration-300 card-hover">
                                                    <span class=format!(
                                                        "block w-fit mx-auto mb-2 {} group-hover:scale-110 transition-transform duration-300",
                                                        skill.color,
                                                    )>
                                                        <Icon name=skill.icon class="w-7 h-7 lg:w-8 lg:h-8" />
                                                    </span>
                                                    <p class="text-xs font-medium">{skill.name}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
