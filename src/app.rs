use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::content::structured_data;
use crate::ui::{NotFoundPage, PortfolioPage};

/// Public URL of the site, provided as context by the server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrl(pub String);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site_url = use_context::<SiteUrl>().map(|SiteUrl(url)| url);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {site_url.map(|url| view! { <SiteIdentity url/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Canonical link, `og:url` and schema.org data for the deployed site
#[component]
fn SiteIdentity(url: String) -> impl IntoView {
    let json_ld = structured_data(&url).to_string();

    view! {
        <link rel="canonical" href=url.clone()/>
        <Meta property="og:url" content=url/>
        <script type="application/ld+json" inner_html=json_ld></script>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_identity_points_at_site() {
        let html = Owner::new().with(|| {
            view! { <SiteIdentity url="https://mrohit.netlify.app/".to_string()/> }.to_html()
        });
        assert!(html.contains(r#"rel="canonical" href="https://mrohit.netlify.app/""#));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains("schema.org"));
    }
}
