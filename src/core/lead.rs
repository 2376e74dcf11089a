//! Lead capture form: validation, state, and the submission payload
//!
//! The form moves strictly forward:
//!
//! ```text
//! Hidden -> Revealed -> Submitting -> Completed
//!                                  \-> Failed
//! ```
//!
//! `Completed` and `Failed` look the same to the visitor: both show the
//! thank-you message. A failed submission is only logged.

use chrono::{DateTime, SecondsFormat, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::{SubmitError, SubmitRejected, TransitionError};

/// Endpoint receiving alpha-access requests
pub const DEFAULT_LEAD_ENDPOINT: &str = "https://app.joinaurora.co/api/v1/alpha-access/";

/// Border color of an input that failed validation
pub const INVALID_BORDER_COLOR: &str = "rgb(255, 80, 80)";
/// Border color of an input in its normal state
pub const NORMAL_BORDER_COLOR: &str = "rgba(255, 255, 255, 0.3)";

/// Lead form lifecycle
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    #[display("hidden")]
    Hidden,
    #[display("revealed")]
    Revealed,
    #[display("submitting")]
    Submitting,
    #[display("failed")]
    Failed,
    #[display("completed")]
    Completed,
}

impl FormState {
    /// The form has been replaced by the thank-you message
    pub fn shows_thank_you(self) -> bool {
        matches!(self, FormState::Completed | FormState::Failed)
    }

    pub fn is_form_visible(self) -> bool {
        matches!(self, FormState::Revealed | FormState::Submitting)
    }
}

/// Form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

/// Which inputs are currently marked invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        !self.name && !self.email
    }

    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
        }
    }
}

/// Whitespace as browsers see it in form input: Unicode white space plus the
/// byte order mark, without NEL.
fn is_input_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Permissive email check: `local@domain.tld`, no whitespace, one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_input_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // some '.' inside the domain with at least one character on each side
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Validated name and email, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
}

/// Check the raw input values.
pub fn validate(name: &str, email: &str) -> Result<Lead, FieldErrors> {
    let name = name.trim_matches(is_input_whitespace);
    let email = email.trim_matches(is_input_whitespace);

    let errors = FieldErrors {
        name: name.is_empty(),
        email: !is_valid_email(email),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Lead {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// JSON body posted to the lead endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    /// ISO-8601 UTC time of the submit, e.g. `2025-03-01T12:00:00.000Z`
    pub timestamp: String,
}

impl LeadSubmission {
    pub fn new(lead: Lead, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: lead.name,
            email: lead.email,
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Lead form state plus the per-input error markers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadController {
    state: FormState,
    errors: FieldErrors,
}

impl LeadController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    fn advance(&mut self, from: FormState, to: FormState) -> Result<(), TransitionError> {
        if self.state != from {
            return Err(TransitionError {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// The call-to-action was activated.
    pub fn reveal(&mut self) -> Result<(), TransitionError> {
        self.advance(FormState::Hidden, FormState::Revealed)
    }

    /// Validate and, if valid, start submitting.
    ///
    /// Invalid input marks the failing fields and leaves the state unchanged.
    pub fn submit(
        &mut self,
        name: &str,
        email: &str,
        submitted_at: DateTime<Utc>,
    ) -> Result<LeadSubmission, SubmitRejected> {
        if self.state != FormState::Revealed {
            return Err(TransitionError {
                from: self.state,
                to: FormState::Submitting,
            }
            .into());
        }

        match validate(name, email) {
            Ok(lead) => {
                self.errors = FieldErrors::default();
                self.advance(FormState::Revealed, FormState::Submitting)?;
                Ok(LeadSubmission::new(lead, submitted_at))
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Editing an input clears its error marker.
    pub fn clear_error(&mut self, field: Field) {
        match field {
            Field::Name => self.errors.name = false,
            Field::Email => self.errors.email = false,
        }
    }

    /// Record the outcome of the request. Either way the thank-you message
    /// is shown next.
    pub fn settle(&mut self, outcome: &Result<(), SubmitError>) -> Result<FormState, TransitionError> {
        let to = match outcome {
            Ok(()) => FormState::Completed,
            Err(_) => FormState::Failed,
        };
        self.advance(FormState::Submitting, to)?;
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 5).unwrap()
    }

    fn revealed() -> LeadController {
        let mut controller = LeadController::new();
        controller.reveal().unwrap();
        controller
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "jane@example.com",
            "a@b.c",
            "first.last+tag@sub.domain.org",
            "x@..y",
            "ü@exämple.de",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "a@b",
            "@example.com",
            "jane@",
            "jane@.com",
            "jane@example.",
            "jane@@example.com",
            "ja ne@example.com",
            "jane@exa mple.com",
            "jane.example.com",
            "a@b@c.d",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_validate_trims() {
        let lead = validate("  Jane ", " jane@example.com\n").unwrap();
        assert_eq!(lead.name, "Jane");
        assert_eq!(lead.email, "jane@example.com");
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert!(!is_valid_email("jane@exa\u{feff}mple.com"));

        let lead = validate("\u{feff}Jane\u{feff}", "\u{feff}jane@example.com").unwrap();
        assert_eq!(lead.name, "Jane");
        assert_eq!(lead.email, "jane@example.com");

        let errors = validate("\u{feff}", "jane@example.com").unwrap_err();
        assert!(errors.name);
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(is_valid_email("jane@exa\u{85}mple.com"));
    }

    #[test]
    fn test_validate_whitespace_name() {
        let errors = validate("   ", "jane@example.com").unwrap_err();
        assert!(errors.name);
        assert!(!errors.email);
    }

    #[test]
    fn test_submission_timestamp_format() {
        let lead = validate("Jane", "jane@example.com").unwrap();
        let submission = LeadSubmission::new(lead, now());

        assert_eq!(submission.timestamp, "2025-03-01T12:30:05.000Z");
    }

    #[test]
    fn test_submission_json_shape() {
        let lead = validate("Jane", "jane@example.com").unwrap();
        let json = serde_json::to_value(LeadSubmission::new(lead, now())).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@example.com",
                "timestamp": "2025-03-01T12:30:05.000Z",
            })
        );
    }

    #[test]
    fn test_reveal_only_from_hidden() {
        let mut controller = revealed();
        assert_eq!(controller.state(), FormState::Revealed);

        let err = controller.reveal().unwrap_err();
        assert_eq!(err.from, FormState::Revealed);
        assert_eq!(controller.state(), FormState::Revealed);
    }

    #[test]
    fn test_submit_before_reveal_is_rejected() {
        let mut controller = LeadController::new();
        let result = controller.submit("Jane", "jane@example.com", now());

        assert!(matches!(result, Err(SubmitRejected::Transition(_))));
        assert_eq!(controller.state(), FormState::Hidden);
    }

    #[test]
    fn test_invalid_submit_marks_both_fields() {
        let mut controller = revealed();
        let result = controller.submit("", "a@b", now());

        assert_eq!(
            result,
            Err(SubmitRejected::Invalid(FieldErrors {
                name: true,
                email: true,
            }))
        );
        assert_eq!(controller.state(), FormState::Revealed);
        assert!(controller.errors().has(Field::Name));
        assert!(controller.errors().has(Field::Email));
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut controller = revealed();
        let _ = controller.submit("", "a@b", now());

        controller.clear_error(Field::Email);
        assert!(controller.errors().name);
        assert!(!controller.errors().email);
    }

    #[test]
    fn test_valid_submit_moves_to_submitting() {
        let mut controller = revealed();
        let submission = controller.submit("Jane", "jane@example.com", now()).unwrap();

        assert_eq!(submission.name, "Jane");
        assert_eq!(controller.state(), FormState::Submitting);
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut controller = revealed();
        controller.submit("Jane", "jane@example.com", now()).unwrap();

        let second = controller.submit("Jane", "jane@example.com", now());
        assert!(matches!(second, Err(SubmitRejected::Transition(_))));
        assert_eq!(controller.state(), FormState::Submitting);
    }

    #[test]
    fn test_settle_success_and_failure_both_show_thank_you() {
        let outcomes = [
            Ok(()),
            Err(SubmitError::Network("connection refused".to_string())),
        ];

        for outcome in outcomes {
            let mut controller = revealed();
            controller.submit("Jane", "jane@example.com", now()).unwrap();

            let state = controller.settle(&outcome).unwrap();
            assert!(state.shows_thank_you());
            assert_eq!(controller.state(), state);
        }
    }

    #[test]
    fn test_final_states_never_regress() {
        let mut controller = revealed();
        controller.submit("Jane", "jane@example.com", now()).unwrap();
        controller
            .settle(&Err(SubmitError::Network("offline".to_string())))
            .unwrap();

        assert!(controller.reveal().is_err());
        assert!(controller.settle(&Ok(())).is_err());
        assert!(controller.submit("Jane", "jane@example.com", now()).is_err());
        assert_eq!(controller.state(), FormState::Failed);
    }

    #[test]
    fn test_form_visibility() {
        assert!(!FormState::Hidden.is_form_visible());
        assert!(FormState::Submitting.is_form_visible());
        assert!(!FormState::Completed.is_form_visible());
        assert!(FormState::Failed.shows_thank_you());
    }
}
