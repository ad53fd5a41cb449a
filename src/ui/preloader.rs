use leptos::prelude::*;

use crate::core::content::PROFILE;
use crate::core::loading::{
    INTRO_STAGGER, INTRO_TEXT, OUTRO_STAGGER, OUTRO_TEXT, OVERLAY_EXIT, PRELOADER_LINES, PROGRESS_BAR,
    PreloaderPhase,
};

/// Full-screen intro overlay.
///
/// Walks the phases of `loading::schedule()` and runs `on_complete` exactly
/// once when the sequence reaches `Done`.
#[component]
pub fn Preloader(on_complete: Callback<()>) -> impl IntoView {
    let (phase, set_phase) = signal(None::<PreloaderPhase>);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::core::loading::schedule;
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let mut elapsed = 0.0_f64;
            for (next, at) in schedule() {
                let wait_ms = ((at - elapsed) * 1000.0).max(0.0).round() as u32;
                if wait_ms > 0 {
                    TimeoutFuture::new(wait_ms).await;
                }
                elapsed = at;
                set_phase.set(Some(next));
            }
            on_complete.run(());
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (set_phase, on_complete);

    let reached = move |target: PreloaderPhase| phase.get().is_some_and(|p| p >= target);

    let intro_delays = INTRO_STAGGER.delays(PRELOADER_LINES);
    let outro_delays = OUTRO_STAGGER.delays(PRELOADER_LINES);
    let line_style = move |index: usize| {
        if reached(PreloaderPhase::Outro) {
            OUTRO_TEXT.style(true, outro_delays[index])
        } else {
            INTRO_TEXT.style(reached(PreloaderPhase::Intro), intro_delays[index])
        }
    };
    let line_style_1 = line_style.clone();

    view! {
        <div
            class="preloader"
            style=move || OVERLAY_EXIT.style(reached(PreloaderPhase::Exit), 0.0)
            aria-busy="true"
        >
            <div class="flex flex-col items-center space-y-8">
                <div
                    class="text-3xl sm:text-4xl lg:text-5xl font-bold text-gradient animate-pulse-glow"
                    style=move || line_style(0)
                >
                    {PROFILE.name}
                </div>
                <div
                    class="text-lg sm:text-xl font-semibold tracking-wider"
                    style=move || line_style_1(1)
                >
                    {PROFILE.tagline}
                </div>
                <div class="progress-container">
                    <div
                        class="progress-bar"
                        style=move || PROGRESS_BAR.style(reached(PreloaderPhase::Progress), 0.0)
                    ></div>
                </div>
                <div class="text-sm font-light opacity-60">"Loading Experience..."</div>
            </div>
        </div>
    }
}
