//! ServiceCard: обёртка над Thaw Card для блока услуг.
//!
//! Карточка помечена `data-reveal-card` (появление при прокрутке) и
//! `data-tilt` (наклон за курсором). Поведение подключают контроллеры из
//! `shared::interactions`, компонент только выставляет атрибуты.
//!
//! # Пример
//! ```ignore
//! <ServiceCard icon_name="ruler" title="Planning">
//!     <p>"Measured drawings and a fixed quote."</p>
//! </ServiceCard>
//! ```

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn ServiceCard(
    /// Имя иконки из `shared::icons`
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class="service-card" attr:data-reveal-card="" attr:data-tilt="">
            <div class="service-card__icon">{icon(&icon_name)}</div>
            <h3 class="service-card__title">{title}</h3>
            <div class="service-card__body">{children()}</div>
        </Card>
    }
}
