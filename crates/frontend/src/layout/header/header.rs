use crate::layout::header::nav_menu::NavMenu;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="#home">"Vitrina Studio"</a>
                <NavMenu />
            </div>
        </header>
    }
}
