//! Error types for the landing page choreography.

use thiserror::Error;

use super::lead::{FieldErrors, FormState};
use super::scene::SceneNode;

/// The page does not contain what the choreography needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no browser window available")]
    NoWindow,
    #[error("required scene element `{0}` is missing from the page")]
    MissingElement(SceneNode),
    #[error("scroll reveal target #{0} was never mounted")]
    MissingRevealTarget(usize),
    #[error("browser rejected {0}")]
    Browser(String),
}

/// A lead submission did not reach the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("failed to encode lead: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
}

/// An attempted lead form state change that would move backwards or skip a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move lead form from {from} to {to}")]
pub struct TransitionError {
    pub from: FormState,
    pub to: FormState,
}

/// Why a submit attempt did not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("lead form has invalid fields")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Out-of-range choreography settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("intro duration must be positive, got {0}ms")]
    NonPositiveDuration(f64),
    #[error("`{name}` must be a fraction, got {value}")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("lead endpoint is empty")]
    MissingEndpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_names_the_element() {
        let err = SceneError::MissingElement(SceneNode::Shape(2));
        assert_eq!(
            err.to_string(),
            "required scene element `shape #3` is missing from the page"
        );
    }

    #[test]
    fn test_transition_error_message() {
        let err = TransitionError {
            from: FormState::Completed,
            to: FormState::Hidden,
        };
        assert_eq!(err.to_string(), "cannot move lead form from completed to hidden");
    }

    #[test]
    fn test_rejected_wraps_transition() {
        let err: SubmitRejected = TransitionError {
            from: FormState::Hidden,
            to: FormState::Submitting,
        }
        .into();
        assert_eq!(err.to_string(), "cannot move lead form from hidden to submitting");
    }
}
