//! Intro animation loop
//!
//! Runs `IntroAnimator` once per display refresh until progress reaches 1.
//! When convergence completes, the hand-off runs as a separate task: wait for
//! the shape fade-out, play the hand-off timeline, then the content typer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::scene_graph::{DomScene, SceneRefs};
use super::sequencer::play;
use super::typer::run_content_typer;
use crate::core::{ChoreographyConfig, IntroAnimator, SceneError, apply_intro_frame, handoff_timeline};

/// Start the intro on the next animation frame.
pub fn start_intro(
    refs: SceneRefs,
    config: ChoreographyConfig,
    headline: &'static str,
) -> Result<(), SceneError> {
    let scene = Rc::new(DomScene::resolve(&refs)?);
    let window = web_sys::window().ok_or(SceneError::NoWindow)?;

    let mut animator = IntroAnimator::new(&config);
    let config = Rc::new(config);

    let frame_closure = Rc::new(RefCell::new(None::<Closure<dyn FnMut(f64)>>));
    let frame_closure_clone = frame_closure.clone();

    let animate = move |now: f64| {
        let frame = animator.tick(now, scene.viewport());
        apply_intro_frame(&*scene, &frame, config.shape_fade_out_ms);

        if frame.trigger_handoff {
            spawn_local(run_handoff(scene.clone(), config.clone(), headline));
        }

        if frame.finished {
            return;
        }

        // Request next frame
        if let Some(window) = web_sys::window() {
            let closure = frame_closure_clone.borrow();
            if let Some(closure) = closure.as_ref() {
                let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            }
        }
    };

    let closure = Closure::new(animate);
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| SceneError::Browser(format!("requestAnimationFrame: {e:?}")))?;

    // The closure holds its own handle and stays alive for the page lifetime
    *frame_closure.borrow_mut() = Some(closure);

    Ok(())
}

async fn run_handoff(scene: Rc<DomScene>, config: Rc<ChoreographyConfig>, headline: &'static str) {
    TimeoutFuture::new(config.shape_fade_out_ms).await;
    leptos::logging::log!("Intro converged, handing off to content");

    play(&*scene, &handoff_timeline()).await;
    run_content_typer(&*scene, &config, headline).await;
}
