//! Contact form state: field values, per-field errors and the submission lifecycle.
//!
//! Pure data; the frontend view model keeps it in a signal and drives the
//! asynchronous parts (submitter, notice timers) around these transitions.

use super::field_rules::{validate_field, FieldId};
use super::request::{ContactRequest, SubmitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldSlot {
    value: String,
    /// `Some` while the field is marked invalid
    error: Option<&'static str>,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// A submission is already in flight
    Busy,
    /// At least one field failed; `focus` is the first one in declaration order
    Invalid { focus: FieldId },
    /// All fields valid; the request should be handed to the submitter
    Send(ContactRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    fields: [FieldSlot; 3],
    submission: SubmissionState,
    failure: Option<&'static str>,
    /// Bumped on every shown notice so a stale auto-hide timer cannot hide a newer one
    notice_seq: u32,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FieldId) -> &str {
        &self.fields[field.index()].value
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.fields[field.index()].error
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.error(field).is_some()
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Submit control is disabled and shows the "sending" caption
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn success_visible(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    pub fn failure_message(&self) -> Option<&'static str> {
        match self.submission {
            SubmissionState::Failed => self.failure,
            _ => None,
        }
    }

    /// User edit. An already-invalid field is re-validated immediately;
    /// a valid one waits for blur.
    pub fn input(&mut self, field: FieldId, value: String) {
        let slot = &mut self.fields[field.index()];
        slot.value = value;
        if slot.error.is_some() {
            slot.error = validate_field(field, &slot.value);
        }

        if self.submission == SubmissionState::Failed {
            self.submission = SubmissionState::Idle;
            self.failure = None;
        }
    }

    /// Field lost focus
    pub fn blur(&mut self, field: FieldId) {
        let slot = &mut self.fields[field.index()];
        slot.error = validate_field(field, &slot.value);
    }

    /// Validate every field in declaration order, marking all invalid ones.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.submission == SubmissionState::Submitting {
            return SubmitDecision::Busy;
        }

        self.submission = SubmissionState::Validating;
        self.failure = None;

        let mut first_invalid = None;
        for field in FieldId::ALL {
            let slot = &mut self.fields[field.index()];
            slot.error = validate_field(field, &slot.value);
            if slot.error.is_some() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }

        if let Some(focus) = first_invalid {
            self.submission = SubmissionState::Idle;
            return SubmitDecision::Invalid { focus };
        }

        self.submission = SubmissionState::Submitting;
        SubmitDecision::Send(ContactRequest::new(
            self.value(FieldId::Name),
            self.value(FieldId::Phone),
            self.value(FieldId::Message),
        ))
    }

    /// Apply the submitter's answer. Returns the sequence number of the notice
    /// that is now visible; pass it back to [`Self::dismiss_notice`].
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) -> u32 {
        match result {
            Ok(()) => {
                self.fields = Default::default();
                self.failure = None;
                self.submission = SubmissionState::Succeeded;
            }
            Err(e) => {
                self.failure = Some(e.user_message());
                self.submission = SubmissionState::Failed;
            }
        }
        self.notice_seq = self.notice_seq.wrapping_add(1);
        self.notice_seq
    }

    /// Auto-hide of the notice identified by `seq`. Returns `false` when the
    /// notice was already replaced or dismissed.
    pub fn dismiss_notice(&mut self, seq: u32) -> bool {
        let showing = matches!(
            self.submission,
            SubmissionState::Succeeded | SubmissionState::Failed
        );
        if !showing || seq != self.notice_seq {
            return false;
        }
        self.submission = SubmissionState::Idle;
        self.failure = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.input(FieldId::Name, "Ana Petrović".to_string());
        state.input(FieldId::Phone, "+381 64 123 4567".to_string());
        state.input(FieldId::Message, "We need a new kitchen floor.".to_string());
        state
    }

    #[test]
    fn test_valid_submission_lifecycle() {
        let mut state = filled();

        let SubmitDecision::Send(request) = state.begin_submit() else {
            panic!("expected a request");
        };
        assert_eq!(request.name, "Ana Petrović");
        assert!(state.is_submitting());
        assert_eq!(state.begin_submit(), SubmitDecision::Busy);

        let seq = state.finish_submit(&Ok(()));
        assert!(!state.is_submitting());
        assert!(state.success_visible());
        for field in FieldId::ALL {
            assert_eq!(state.value(field), "");
            assert!(!state.is_invalid(field));
        }

        assert!(state.dismiss_notice(seq));
        assert_eq!(state.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_invalid_submission_marks_all_and_focuses_first() {
        let mut state = ContactFormState::new();
        state.input(FieldId::Name, "Ana".to_string());
        state.input(FieldId::Phone, "abc".to_string());

        assert_eq!(
            state.begin_submit(),
            SubmitDecision::Invalid {
                focus: FieldId::Phone
            }
        );
        assert!(!state.is_invalid(FieldId::Name));
        assert!(state.is_invalid(FieldId::Phone));
        assert!(state.is_invalid(FieldId::Message));
        assert_eq!(state.value(FieldId::Name), "Ana");
        assert_eq!(state.value(FieldId::Phone), "abc");
        assert_eq!(state.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_focus_follows_declaration_order() {
        let mut state = ContactFormState::new();
        assert_eq!(
            state.begin_submit(),
            SubmitDecision::Invalid {
                focus: FieldId::Name
            }
        );
    }

    #[test]
    fn test_valid_field_waits_for_blur() {
        let mut state = ContactFormState::new();
        state.input(FieldId::Name, "A".to_string());
        assert!(!state.is_invalid(FieldId::Name));

        state.blur(FieldId::Name);
        assert!(state.is_invalid(FieldId::Name));

        // once invalid, each edit re-validates
        state.input(FieldId::Name, "An".to_string());
        assert!(!state.is_invalid(FieldId::Name));

        // fixed again, so the next edit waits for blur
        state.input(FieldId::Name, "".to_string());
        assert!(!state.is_invalid(FieldId::Name));

        state.blur(FieldId::Name);
        assert_eq!(state.error(FieldId::Name), Some("Please enter your name."));
    }

    #[test]
    fn test_failure_keeps_data_and_reenables_submit() {
        let mut state = filled();
        assert!(matches!(state.begin_submit(), SubmitDecision::Send(_)));

        state.finish_submit(&Err(SubmitError::Unavailable));
        assert!(!state.is_submitting());
        assert!(!state.success_visible());
        assert_eq!(
            state.failure_message(),
            Some(SubmitError::Unavailable.user_message())
        );
        assert_eq!(state.value(FieldId::Name), "Ana Petrović");

        state.input(FieldId::Message, "We need a new kitchen floor!".to_string());
        assert_eq!(state.submission(), SubmissionState::Idle);
        assert_eq!(state.failure_message(), None);
    }

    #[test]
    fn test_stale_notice_timer_is_ignored() {
        let mut state = filled();
        state.begin_submit();
        let first = state.finish_submit(&Err(SubmitError::Unavailable));

        assert!(matches!(state.begin_submit(), SubmitDecision::Send(_)));
        let second = state.finish_submit(&Ok(()));

        assert!(!state.dismiss_notice(first));
        assert!(state.success_visible());
        assert!(state.dismiss_notice(second));
        assert!(!state.dismiss_notice(second));
    }
}
