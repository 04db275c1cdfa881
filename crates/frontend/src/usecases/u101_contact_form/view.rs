use super::model::{ContactSubmitter, SimulatedSubmitter};
use super::view_model::ContactFormViewModel;
use crate::shared::icons::icon;
use contracts::shared::config::SiteConfig;
use contracts::usecases::u101_contact_form::FieldId;
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use std::rc::Rc;

fn input_class(vm: ContactFormViewModel, field: FieldId) -> impl Fn() -> &'static str {
    move || {
        if vm.is_invalid(field) {
            "form__input is-invalid"
        } else {
            "form__input"
        }
    }
}

fn aria_invalid(vm: ContactFormViewModel, field: FieldId) -> impl Fn() -> &'static str {
    move || if vm.is_invalid(field) { "true" } else { "false" }
}

#[component]
fn FieldError(vm: ContactFormViewModel, field: FieldId) -> impl IntoView {
    view! {
        <p id=format!("{}-error", field.dom_id()) class="form__error" aria-live="polite">
            {move || vm.error(field).unwrap_or_default()}
        </p>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let submitter: Rc<dyn ContactSubmitter> =
        Rc::new(SimulatedSubmitter::from_config(&config.form));
    let vm = ContactFormViewModel::new(submitter, config.form.notice_hide_ms);

    let name_ref = NodeRef::<html::Input>::new();
    let phone_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let focus_field = move |field: FieldId| {
        let focused = match field {
            FieldId::Name => name_ref.get().map(|el| el.focus()),
            FieldId::Phone => phone_ref.get().map(|el| el.focus()),
            FieldId::Message => message_ref.get().map(|el| el.focus()),
        };
        if focused.is_none() {
            log::debug!("u101: no element to focus for `{}`", field.dom_id());
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(field) = vm.submit_command() {
            focus_field(field);
        }
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form__group">
                <label class="form__label" for="name">"Your name"</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    node_ref=name_ref
                    class=input_class(vm, FieldId::Name)
                    aria-invalid=aria_invalid(vm, FieldId::Name)
                    aria-describedby="name-error"
                    prop:value=move || vm.value(FieldId::Name)
                    on:input=move |ev| vm.on_input(FieldId::Name, event_target_value(&ev))
                    on:blur=move |_| vm.on_blur(FieldId::Name)
                />
                <FieldError vm=vm field=FieldId::Name />
            </div>

            <div class="form__group">
                <label class="form__label" for="phone">"Phone"</label>
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    autocomplete="tel"
                    placeholder="+381 64 123 4567"
                    node_ref=phone_ref
                    class=input_class(vm, FieldId::Phone)
                    aria-invalid=aria_invalid(vm, FieldId::Phone)
                    aria-describedby="phone-error"
                    prop:value=move || vm.value(FieldId::Phone)
                    on:input=move |ev| vm.on_input(FieldId::Phone, event_target_value(&ev))
                    on:blur=move |_| vm.on_blur(FieldId::Phone)
                />
                <FieldError vm=vm field=FieldId::Phone />
            </div>

            <div class="form__group">
                <label class="form__label" for="message">"About your project"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    node_ref=message_ref
                    class=input_class(vm, FieldId::Message)
                    aria-invalid=aria_invalid(vm, FieldId::Message)
                    aria-describedby="message-error"
                    prop:value=move || vm.value(FieldId::Message)
                    on:input=move |ev| vm.on_input(FieldId::Message, event_target_value(&ev))
                    on:blur=move |_| vm.on_blur(FieldId::Message)
                ></textarea>
                <FieldError vm=vm field=FieldId::Message />
            </div>

            <button
                type="submit"
                class="button button--primary contact-form__submit"
                data-ripple=""
                disabled=move || vm.is_submitting()
                aria-busy=move || if vm.is_submitting() { "true" } else { "false" }
            >
                {move || if vm.is_submitting() {
                    view! { <span>"Sending…"</span> }.into_any()
                } else {
                    view! { <span>"Send message"</span> {icon("send")} }.into_any()
                }}
            </button>

            <div
                class="form-notice form-notice--success"
                role="status"
                hidden=move || !vm.success_visible()
            >
                {icon("check")}
                <span>"Thank you! We received your message and will call you back within one working day."</span>
            </div>
            <div
                class="form-notice form-notice--error"
                role="alert"
                hidden=move || vm.failure_message().is_none()
            >
                {move || vm.failure_message().unwrap_or_default()}
            </div>
        </form>
    }
}
