//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <img src="/images/logo.svg" alt="Aurora" class="not-found-logo" />

            // Error code
            <h1>"404"</h1>

            <p class="subtitle">
                "The page you're looking for doesn't exist or has been moved."
            </p>

            <A href="/" attr:class="pill not-found-home">
                "Back to Aurora"
            </A>
        </div>
    }
}
