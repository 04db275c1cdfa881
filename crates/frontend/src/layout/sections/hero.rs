use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero" data-parallax="">
            <span class="hero__shape hero__shape--ring" data-depth="40" aria-hidden="true"></span>
            <span class="hero__shape hero__shape--dot" data-depth="-25" aria-hidden="true"></span>
            <span class="hero__shape hero__shape--square" data-depth="60" aria-hidden="true"></span>

            <div class="hero__content" data-reveal="">
                <p class="hero__eyebrow">"Interior renovation · Belgrade"</p>
                <h1 class="hero__title">"Homes rebuilt around the way you live"</h1>
                <p class="hero__lead">
                    "From the first measurement to the last coat of paint, one team, one schedule, one fixed price."
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href="#contact" data-ripple="">"Request a quote"</a>
                    <a class="button button--ghost" href="#services" data-ripple="">"What we do"</a>
                </div>
            </div>
        </section>
    }
}
