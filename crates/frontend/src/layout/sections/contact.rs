use crate::layout::footer::footer::{EMAIL, PHONE_DISPLAY, PHONE_HREF};
use crate::shared::icons::icon;
use crate::usecases::u101_contact_form::ContactForm;
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <header class="section__header" data-reveal-header="">
                <h2 class="section__title">"Let's talk about your space"</h2>
                <p class="section__lead">"Leave your number and we will call you back within one working day."</p>
            </header>
            <div class="contact">
                <div class="contact__details" data-reveal="">
                    <a class="contact__phone" href=PHONE_HREF data-copy-phone=PHONE_DISPLAY>
                        {icon("phone")}
                        <span>{PHONE_DISPLAY}</span>
                    </a>
                    <p class="contact__hint">"On a phone? Press and hold the number to copy it."</p>
                    <a class="contact__mail" href=format!("mailto:{}", EMAIL)>
                        {icon("mail")}
                        <span>{EMAIL}</span>
                    </a>
                </div>
                <div class="contact__form" data-reveal="">
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
