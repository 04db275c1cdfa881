use leptos::prelude::*;

const STEPS: [(&str, &str); 4] = [
    ("Visit", "We come over, measure and listen to what you want to change."),
    ("Quote", "Within five days you get drawings and a fixed, itemised price."),
    ("Build", "A dedicated crew works to a published day-by-day schedule."),
    ("Handover", "Final walkthrough, cleanup and a two-year workmanship warranty."),
];

#[component]
pub fn Process() -> impl IntoView {
    view! {
        <section id="process" class="section section--alt">
            <header class="section__header" data-reveal-header="">
                <h2 class="section__title">"How we work"</h2>
            </header>
            <ol class="process">
                {STEPS.into_iter().enumerate().map(|(i, (title, text))| view! {
                    <li class="process__step" data-reveal-step="">
                        <span class="process__number">{format!("{:02}", i + 1)}</span>
                        <h3 class="process__title">{title}</h3>
                        <p>{text}</p>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}
