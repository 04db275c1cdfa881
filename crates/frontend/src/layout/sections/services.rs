use crate::shared::components::ServiceCard;
use leptos::prelude::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section">
            <header class="section__header" data-reveal-header="">
                <h2 class="section__title">"Services"</h2>
                <p class="section__lead">"Everything a renovation needs, under one contract."</p>
            </header>
            <div class="services-grid">
                <ServiceCard icon_name="ruler" title="Planning & design">
                    <p>"Measured drawings, 3D layouts and a fixed quote before any work starts."</p>
                </ServiceCard>
                <ServiceCard icon_name="home" title="Full renovation">
                    <p>"Demolition, installations, floors and walls, coordinated by one site manager."</p>
                </ServiceCard>
                <ServiceCard icon_name="brush" title="Finishing">
                    <p>"Painting, tiling and joinery with materials you pick in our showroom."</p>
                </ServiceCard>
            </div>
        </section>
    }
}
