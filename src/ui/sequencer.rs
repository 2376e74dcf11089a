//! Timeline playback on the browser event loop.

use gloo_timers::future::TimeoutFuture;

use crate::core::{Scene, Timeline, apply_step};

/// Play `timeline` on `scene`, returning once its last step has finished.
///
/// Steps are applied at their start time; tweens run as CSS transitions, so
/// waiting for the timeline end is what makes the playback sequential.
pub async fn play(scene: &impl Scene, timeline: &Timeline) {
    let mut clock_ms = 0;

    for entry in timeline.entries() {
        if entry.start_ms > clock_ms {
            TimeoutFuture::new(entry.start_ms - clock_ms).await;
            clock_ms = entry.start_ms;
        }
        apply_step(scene, &entry.step);
    }

    let end_ms = timeline.duration_ms();
    if end_ms > clock_ms {
        TimeoutFuture::new(end_ms - clock_ms).await;
    }
}
