//! Platform-independent choreography state for the landing page

pub mod config;
pub mod easing;
pub mod error;
pub mod intro;
pub mod lead;
pub mod reveal;
pub mod scene;
pub mod timeline;
pub mod typewriter;

pub use config::ChoreographyConfig;
pub use error::{ConfigError, SceneError, SubmitError, SubmitRejected, TransitionError};
pub use intro::{IntroAnimator, IntroFrame, Viewport};
pub use lead::{Field, FieldErrors, FormState, LeadController, LeadSubmission};
pub use reveal::RevealSet;
pub use scene::{Scene, SceneNode, apply_intro_frame, apply_step};
pub use timeline::{
    Step, Timeline, form_reveal_timeline, handoff_timeline, thank_you_timeline,
};
pub use typewriter::{ContentStep, Typewriter, content_plan};
