//! Landing page component
//!
//! The Aurora alpha landing page:
//! - SEO meta tags
//! - Full-screen intro: masked, rotating logo shapes converging into the logo
//! - Typed headline, subtitle and the early access pill / lead form
//! - Corner links (privacy, persona, email, careers)
//! - Story sections revealed on scroll

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::intro::SHAPE_COUNT;
use crate::ui::lead_form::LeadForm;
use crate::ui::scene_graph::SceneRefs;
use crate::ui::scroll_reveal::{RevealOnScroll, provide_scroll_reveal};

/// Headline typed out once the intro has handed off
pub const HEADLINE: &str = "The workspace that thinks ahead of you.";

const SUBTITLE: &str = "Aurora turns scattered notes, docs and conversations into one calm place to \
                        work. We are opening the alpha to a small group of teams.";

const CONTACT_EMAIL: &str = "hello@joinaurora.co";
const CAREERS_URL: &str = "https://joinaurora.co/careers";

/// Landing page with the intro choreography
#[component]
pub fn LandingPage() -> impl IntoView {
    let refs = SceneRefs::new();
    let reveal_registry = provide_scroll_reveal();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::ui::intro::start_intro;
        use crate::ui::scene_graph::read_page_config;
        use crate::ui::scroll_reveal::start_scroll_reveal;

        let config = read_page_config();
        let threshold = config.reveal_threshold;

        if let Err(err) = start_intro(refs, config, HEADLINE) {
            leptos::logging::error!("Intro animation not started: {}", err);
        }
        if let Err(err) = start_scroll_reveal(reveal_registry, threshold) {
            leptos::logging::error!("Scroll reveal not started: {}", err);
        }
    });
    #[cfg(feature = "ssr")]
    let _ = reveal_registry;

    view! {
        <SeoMeta />

        <main class="landing">
            // Intro mask; its hole grows until the mask fades away
            <div node_ref=refs.mask class="mask">
                <div node_ref=refs.mask_hole class="mask-hole"></div>
            </div>

            <section node_ref=refs.section_holder class="section-holder">
                {(0..SHAPE_COUNT)
                    .map(|index| {
                        view! {
                            <div
                                node_ref={refs.shapes[index]}
                                class="logo-wrapper"
                                id=format!("logo{}", index + 1)
                            >
                                <img
                                    node_ref={refs.shape_images[index]}
                                    src="/images/oval.svg"
                                    alt=""
                                    aria-hidden="true"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
                <div node_ref=refs.logo_elements class="logo-element">
                    <span class="logo-wordmark">"aurora"</span>
                </div>
            </section>

            <div node_ref=refs.complete_logo class="complete-logo-wrapper">
                <img src="/images/logo.svg" alt="Aurora" class="complete-logo" />
            </div>

            <div node_ref=refs.content class="content-container">
                <div node_ref=refs.text_wrapper class="content-text-wrapper">
                    <h1 node_ref=refs.heading class="heading">
                        <span node_ref=refs.heading_text class="heading-text">{HEADLINE}</span>
                        <span node_ref=refs.heading_cursor class="typed-cursor typed-cursor--h1"></span>
                    </h1>
                    <p node_ref=refs.subtitle class="subtitle">{SUBTITLE}</p>
                    <LeadForm refs=refs />
                </div>
            </div>

            <nav class="corner-links" aria-label="Secondary">
                <a node_ref=refs.privacy_policy href="#privacy" class="privacy-policy-button">
                    "Privacy"
                </a>
                <a node_ref=refs.persona href="#persona" class="persona-button">
                    "Who it's for"
                </a>
                <a
                    node_ref=refs.email
                    href=format!("mailto:{CONTACT_EMAIL}")
                    class="email-button"
                >
                    {CONTACT_EMAIL}
                </a>
                <a
                    node_ref=refs.careers
                    href=CAREERS_URL
                    class="careers-link"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Careers"
                </a>
            </nav>
        </main>

        <StorySections />
    }
}

/// Sections below the fold
#[component]
fn StorySections() -> impl IntoView {
    view! {
        <div class="story">
            <RevealOnScroll class="story-section">
                <h2>"One place for everything your team knows"</h2>
                <p>
                    "Aurora connects the tools you already use and keeps the context \
                     next to the work, so nobody has to go looking for it."
                </p>
            </RevealOnScroll>

            <RevealOnScroll class="story-section">
                <h2>"Answers, not search results"</h2>
                <p>
                    "Ask a question in plain language and get an answer grounded in \
                     your own documents, with links back to the source."
                </p>
            </RevealOnScroll>

            <section id="persona">
                <RevealOnScroll class="story-section">
                    <h2>"Who it's for"</h2>
                    <ul class="persona-list">
                        <li>"Founders who are tired of repeating themselves"</li>
                        <li>"Operators holding a company's process in their head"</li>
                        <li>"Engineers who would rather write code than status updates"</li>
                    </ul>
                </RevealOnScroll>
            </section>

            <section id="privacy">
                <RevealOnScroll class="story-section">
                    <h2>"Privacy"</h2>
                    <p>
                        "We only collect the name and email you give us to contact you \
                         about alpha access. We never sell it and you can ask us to \
                         delete it at any time."
                    </p>
                </RevealOnScroll>
            </section>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Aurora - Alpha Access" />

        <Meta name="description" content="Aurora is the workspace that thinks ahead of you. Request early access to the alpha." />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://joinaurora.co/" />
        <Meta property="og:title" content="Aurora - Alpha Access" />
        <Meta property="og:description" content="The workspace that thinks ahead of you." />
        <Meta property="og:image" content="https://joinaurora.co/images/logo.svg" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="Aurora - Alpha Access" />
        <Meta property="twitter:description" content="The workspace that thinks ahead of you." />

        <Link rel="canonical" href="https://joinaurora.co/" />
    }
}
