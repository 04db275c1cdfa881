use crate::layout::sections::{About, Contact, Hero, Process, Services, Testimonials};
use crate::layout::Shell;
use crate::shared::interactions;
use crate::shared::toast::ToastService;
use contracts::shared::config::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Конфигурация и тосты доступны всему дереву через context
    provide_context(config.clone());
    let toasts = ToastService::new();
    provide_context(toasts);

    // Контроллеры цепляются к готовому DOM, поэтому ждём один тик после монтирования
    let config = StoredValue::new(config);
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            config.with_value(|config| interactions::init_all(config, toasts));
        });
    });

    view! {
        <Shell>
            <Hero />
            <Services />
            <Process />
            <About />
            <Testimonials />
            <Contact />
        </Shell>
    }
}
