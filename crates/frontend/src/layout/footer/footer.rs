use crate::shared::icons::icon;
use crate::shared::interactions::{scroll_spy, MotionPolicy};
use chrono::Datelike;
use leptos::prelude::*;

pub const PHONE_DISPLAY: &str = "+381 64 123 4567";
pub const PHONE_HREF: &str = "tel:+381641234567";
pub const EMAIL: &str = "hello@vitrina.studio";

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p class="site-footer__brand">"Vitrina Studio"</p>
                <p class="site-footer__contacts">
                    <a href=PHONE_HREF data-copy-phone=PHONE_DISPLAY>
                        {icon("phone")}
                        <span>{PHONE_DISPLAY}</span>
                    </a>
                    <a href=format!("mailto:{}", EMAIL)>
                        {icon("mail")}
                        <span>{EMAIL}</span>
                    </a>
                </p>
                <p class="site-footer__copy">{format!("© {} Vitrina Studio. All rights reserved.", year)}</p>
            </div>
            <button
                type="button"
                class="back-to-top"
                data-back-to-top=""
                aria-label="Back to top"
                on:click=move |_| scroll_spy::scroll_to_top(MotionPolicy::detect().reduced_motion)
            >
                {icon("arrow-up")}
            </button>
        </footer>
    }
}
