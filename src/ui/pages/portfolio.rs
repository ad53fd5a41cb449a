//! Portfolio page
//!
//! The single page of the site: preloader, navigation bar, the content
//! sections and the footer.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{PROFILE, Showcase};
use crate::core::loading::{CONTENT_REVEAL, LoadingGate};
use crate::ui::dom::BodyScrollLock;
use crate::ui::navigation::Navigation;
use crate::ui::preloader::Preloader;
use crate::ui::sections::{AboutSection, ContactSection, Footer, HeroSection, ShowcaseSection};
use crate::ui::styles::PortfolioStyles;

/// Portfolio page component
#[component]
pub fn PortfolioPage() -> impl IntoView {
    // Page scroll stays locked until the preloader hands over
    let gate = StoredValue::new(LoadingGate::new(BodyScrollLock));
    let (loading, set_loading) = signal(true);

    let on_loaded = Callback::new(move |_: ()| {
        let opened = gate.try_update_value(|gate| gate.finish()).unwrap_or(false);
        if opened {
            set_loading.set(false);
        }
    });

    view! {
        <SeoMeta />
        <PortfolioStyles />

        <div class="min-h-screen bg-background text-foreground relative">
            <Show when=move || loading.get()>
                <Preloader on_complete=on_loaded />
            </Show>

            <div
                class="main-content"
                style=move || CONTENT_REVEAL.style(!loading.get(), 0.0)
            >
                <Navigation />
                <main>
                    <HeroSection />
                    <AboutSection />
                    {Showcase::ALL
                        .into_iter()
                        .map(|kind| view! { <ShowcaseSection kind=kind /> })
                        .collect_view()}
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </div>
    }
}

/// Title and social preview tags
#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{} | {}", PROFILE.name, PROFILE.role);
    let description = format!(
        "{} is a {} building immersive, animated web experiences. Projects, achievements and contact details.",
        PROFILE.name, PROFILE.role
    );

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        <Meta name="author" content=PROFILE.name />
        <Meta name="keywords" content="portfolio, full stack developer, web developer, MERN, AI, animations" />

        // Open Graph
        <Meta property="og:type" content="profile" />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=description.clone() />

        // Twitter
        <Meta name="twitter:card" content="summary" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=description />
    }
}
