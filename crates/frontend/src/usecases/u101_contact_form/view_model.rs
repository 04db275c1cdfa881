use super::model::ContactSubmitter;
use contracts::usecases::u101_contact_form::{ContactFormState, FieldId, SubmitDecision};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub state: RwSignal<ContactFormState>,
    submitter: StoredValue<Rc<dyn ContactSubmitter>, LocalStorage>,
    notice_hide_ms: u32,
}

impl ContactFormViewModel {
    pub fn new(submitter: Rc<dyn ContactSubmitter>, notice_hide_ms: u32) -> Self {
        Self {
            state: RwSignal::new(ContactFormState::new()),
            submitter: StoredValue::new_local(submitter),
            notice_hide_ms,
        }
    }

    pub fn value(&self, field: FieldId) -> String {
        self.state.with(|s| s.value(field).to_string())
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.state.with(|s| s.error(field))
    }

    pub fn is_invalid(&self, field: FieldId) -> bool {
        self.state.with(|s| s.is_invalid(field))
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn success_visible(&self) -> bool {
        self.state.with(|s| s.success_visible())
    }

    pub fn failure_message(&self) -> Option<&'static str> {
        self.state.with(|s| s.failure_message())
    }

    pub fn on_input(&self, field: FieldId, value: String) {
        self.state.update(|s| s.input(field, value));
    }

    pub fn on_blur(&self, field: FieldId) {
        self.state.update(|s| s.blur(field));
    }

    /// Validate and submit. Returns the field that should receive focus when
    /// validation fails.
    pub fn submit_command(&self) -> Option<FieldId> {
        let mut decision = SubmitDecision::Busy;
        self.state.update(|s| decision = s.begin_submit());

        match decision {
            SubmitDecision::Busy => None,
            SubmitDecision::Invalid { focus } => {
                log::debug!("u101: validation failed, focusing `{}`", focus.dom_id());
                Some(focus)
            }
            SubmitDecision::Send(request) => {
                let pending = self.submitter.with_value(|s| s.submit(request));
                let this = *self;
                leptos::task::spawn_local(async move {
                    let result = pending.await;
                    match &result {
                        Ok(()) => log::info!("u101: contact request accepted"),
                        Err(e) => log::warn!("u101: {}", e),
                    }

                    let mut seq = 0;
                    this.state.update(|s| seq = s.finish_submit(&result));

                    TimeoutFuture::new(this.notice_hide_ms).await;
                    this.state.update(|s| {
                        s.dismiss_notice(seq);
                    });
                });
                None
            }
        }
    }
}
