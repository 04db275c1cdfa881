use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <header class="section__header" data-reveal-header="">
                <h2 class="section__title">"About us"</h2>
            </header>
            <div class="about">
                <div class="about__text" data-reveal="">
                    <p>
                        "We are a team of architects and craftsmen who got tired of renovations that run late and over budget."
                    </p>
                    <ul class="about__list" data-reveal-list="">
                        <li>"Fixed price agreed in writing"</li>
                        <li>"Daily photo reports from site"</li>
                        <li>"Own crews, no subcontractor chains"</li>
                        <li>"Two-year warranty on all work"</li>
                    </ul>
                </div>
                <dl class="stats">
                    <div class="stats__item">
                        <dt>"Years on the market"</dt>
                        <dd><span class="stats__value" data-count="12" data-suffix="+">"12+"</span></dd>
                    </div>
                    <div class="stats__item">
                        <dt>"Projects delivered"</dt>
                        <dd><span class="stats__value" data-count="340">"340"</span></dd>
                    </div>
                    <div class="stats__item">
                        <dt>"Finished on schedule"</dt>
                        <dd><span class="stats__value" data-count="98" data-suffix="%">"98%"</span></dd>
                    </div>
                </dl>
            </div>
        </section>
    }
}
