//! Lead capture form
//!
//! The call-to-action pill swaps itself for a name/email form. A valid submit
//! posts the lead and always ends on the thank-you message; a failed request
//! is only logged.

use chrono::Utc;
use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use super::scene_graph::SceneRefs;
use crate::core::lead::{INVALID_BORDER_COLOR, NORMAL_BORDER_COLOR};
use crate::core::{Field, FormState, LeadController, LeadSubmission, SubmitRejected};

fn border_color(invalid: bool) -> &'static str {
    if invalid {
        INVALID_BORDER_COLOR
    } else {
        NORMAL_BORDER_COLOR
    }
}

fn hidden_attr(hidden: bool) -> &'static str {
    if hidden { "true" } else { "false" }
}

/// Pill, form and thank-you message
#[component]
pub fn LeadForm(
    /// Scene the pill, form and thank-you elements belong to
    refs: SceneRefs,
) -> impl IntoView {
    let controller = RwSignal::new(LeadController::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let name_invalid = Memo::new(move |_| controller.with(|c| c.errors().has(Field::Name)));
    let email_invalid = Memo::new(move |_| controller.with(|c| c.errors().has(Field::Email)));
    let submitting = Memo::new(move |_| controller.with(|c| c.state() == FormState::Submitting));
    let form_visible = Memo::new(move |_| controller.with(|c| c.state().is_form_visible()));
    let thanked = Memo::new(move |_| controller.with(|c| c.state().shows_thank_you()));

    let on_pill_click = move |_| match controller.try_update(|c| c.reveal()) {
        Some(Ok(())) => reveal_form(refs),
        Some(Err(err)) => leptos::logging::log!("Ignoring pill click: {}", err),
        None => {}
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let attempt = controller.try_update(|c| {
            c.submit(&name.get_untracked(), &email.get_untracked(), Utc::now())
        });
        match attempt {
            Some(Ok(submission)) => deliver(refs, controller, submission),
            // the invalid inputs are marked through the controller state
            Some(Err(SubmitRejected::Invalid(_))) => {}
            Some(Err(err)) => leptos::logging::log!("Ignoring submit: {}", err),
            None => {}
        }
    };

    view! {
        <button
            node_ref=refs.pill
            type="button"
            class="pill"
            on:click=on_pill_click
            aria-label="Request early access"
        >
            "Request early access"
        </button>

        <form
            node_ref=refs.lead_form
            class="application-form"
            aria-hidden=move || hidden_attr(!form_visible.get())
            on:submit=on_submit
        >
            <input
                type="text"
                name="name"
                placeholder="Your name"
                autocomplete="name"
                required=true
                style:border-color=move || border_color(name_invalid.get())
                prop:value=move || name.get()
                on:input=move |ev| {
                    name.set(event_target_value(&ev));
                    controller.update(|c| c.clear_error(Field::Name));
                }
            />
            <input
                type="email"
                name="email"
                placeholder="you@company.com"
                autocomplete="email"
                required=true
                style:border-color=move || border_color(email_invalid.get())
                prop:value=move || email.get()
                on:input=move |ev| {
                    email.set(event_target_value(&ev));
                    controller.update(|c| c.clear_error(Field::Email));
                }
            />
            <button type="submit" class="application-submit" disabled=move || submitting.get()>
                "Apply"
            </button>
        </form>

        <div
            node_ref=refs.thank_you
            class="thank-you"
            role="status"
            aria-hidden=move || hidden_attr(!thanked.get())
        >
            <p>"Thank you. We'll be in touch soon."</p>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
fn reveal_form(refs: SceneRefs) {
    use super::scene_graph::DomScene;
    use super::sequencer::play;
    use crate::core::form_reveal_timeline;

    spawn_local(async move {
        match DomScene::resolve(&refs) {
            Ok(scene) => play(&scene, &form_reveal_timeline()).await,
            Err(err) => leptos::logging::error!("Cannot reveal lead form: {}", err),
        }
    });
}

#[cfg(feature = "ssr")]
fn reveal_form(_refs: SceneRefs) {}

/// Send the lead, then show the thank-you message whatever the outcome.
#[cfg(not(feature = "ssr"))]
fn deliver(refs: SceneRefs, controller: RwSignal<LeadController>, submission: LeadSubmission) {
    use super::scene_graph::{DomScene, read_page_config};
    use super::sequencer::play;
    use crate::core::thank_you_timeline;

    let endpoint = read_page_config().lead_endpoint;

    spawn_local(async move {
        let outcome = send_lead(&endpoint, &submission).await;
        if let Err(err) = &outcome {
            leptos::logging::error!("Error submitting application: {}", err);
        }

        if let Some(Err(err)) = controller.try_update(|c| c.settle(&outcome)) {
            leptos::logging::warn!("Lead form out of sync: {}", err);
        }

        match DomScene::resolve(&refs) {
            Ok(scene) => play(&scene, &thank_you_timeline()).await,
            Err(err) => leptos::logging::error!("Cannot show thank-you message: {}", err),
        }
    });
}

#[cfg(feature = "ssr")]
fn deliver(_refs: SceneRefs, _controller: RwSignal<LeadController>, _submission: LeadSubmission) {}

/// POST the lead as JSON. Any HTTP response counts as delivered.
#[cfg(not(feature = "ssr"))]
pub async fn send_lead(
    endpoint: &str,
    submission: &LeadSubmission,
) -> Result<(), crate::core::SubmitError> {
    use crate::core::SubmitError;
    use gloo_net::http::Request;

    let response = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(submission)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if !response.ok() {
        leptos::logging::warn!(
            "Lead endpoint answered {} {}",
            response.status(),
            response.status_text()
        );
    }

    Ok(())
}
