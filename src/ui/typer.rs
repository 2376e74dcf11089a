//! Content reveal after the intro: typed heading, subtitle, pill and links.

use gloo_timers::future::TimeoutFuture;

use super::sequencer::play;
use crate::core::typewriter::content_plan_duration_ms;
use crate::core::{ChoreographyConfig, ContentStep, Scene, SceneNode, Typewriter, content_plan};

/// Run every content stage in order. Each stage starts only after the
/// previous one has finished.
pub async fn run_content_typer(scene: &impl Scene, config: &ChoreographyConfig, headline: &str) {
    // the server-rendered heading is replaced by the typed one
    scene.set_text(SceneNode::HeadingText, "");

    let plan = content_plan(config);
    leptos::logging::log!(
        "Revealing landing content over {}ms",
        content_plan_duration_ms(&plan, headline.chars().count())
    );

    for step in plan {
        match step {
            ContentStep::Animate(timeline) => play(scene, &timeline).await,
            ContentStep::TypeHeading {
                start_delay_ms,
                char_interval_ms,
            } => type_heading(scene, headline, start_delay_ms, char_interval_ms).await,
            ContentStep::Delay(ms) => TimeoutFuture::new(ms).await,
        }
    }

    leptos::logging::log!("Landing content revealed");
}

async fn type_heading(scene: &impl Scene, headline: &str, start_delay_ms: u32, interval_ms: u32) {
    TimeoutFuture::new(start_delay_ms).await;

    let mut typewriter = Typewriter::new(headline);
    while let Some(visible) = typewriter.advance() {
        scene.set_text(SceneNode::HeadingText, &visible);
        TimeoutFuture::new(interval_ms).await;
    }
}
