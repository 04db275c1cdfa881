use leptos::prelude::*;

const QUOTES: [(&str, &str); 3] = [
    ("They finished our flat two days early and the quote did not move by a dinar.", "Milica, Vračar"),
    ("Daily photos meant we could follow everything from abroad.", "Stefan & Ana, Novi Beograd"),
    ("The bathroom looks exactly like the 3D drawing. Rare.", "Dragan, Zemun"),
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section section--alt">
            <header class="section__header" data-reveal-header="">
                <h2 class="section__title">"What clients say"</h2>
            </header>
            <div class="quotes">
                {QUOTES.into_iter().map(|(text, author)| view! {
                    <figure class="quote" data-reveal-quote="">
                        <blockquote>{text}</blockquote>
                        <figcaption>{author}</figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </section>
    }
}
