use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::lead::DEFAULT_LEAD_ENDPOINT;
use crate::ui::pages::{LandingPage, NotFoundPage};

/// Lead endpoint the server publishes to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEndpoint(pub String);

impl Default for LeadEndpoint {
    fn default() -> Self {
        Self(DEFAULT_LEAD_ENDPOINT.to_string())
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let lead_endpoint = use_context::<LeadEndpoint>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // read by the lead form before it posts
                <meta name="lead-endpoint" content=lead_endpoint.0/>
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

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/aurora-landing.css"/>

        // sets the document title
        <Title text="Aurora"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
