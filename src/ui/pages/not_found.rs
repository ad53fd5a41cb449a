//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::PROFILE;
use crate::ui::styles::PortfolioStyles;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <PortfolioStyles />

        <div class="min-h-screen flex flex-col items-center justify-center p-4 relative overflow-hidden">
            <div class="glow-orb absolute top-1/4 left-1/4 w-32 h-32 rounded-full bg-neon-blue/20 blur-3xl pointer-events-none"></div>
            <div class="glow-orb absolute bottom-1/4 right-1/4 w-28 h-28 rounded-full bg-neon-purple/20 blur-3xl pointer-events-none"></div>

            <div class="text-center relative z-10">
                <h1 class="text-7xl font-bold text-gradient mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>
                <p class="text-muted-foreground mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A href="/" attr:class="btn-hero inline-block">
                    "Back to Portfolio"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-muted-foreground">
                    {format!("\u{a9} 2025 {}", PROFILE.name)}
                </p>
            </div>
        </div>
    }
}
