pub mod footer;
pub mod header;
pub mod sections;

use crate::shared::toast::ToastRegion;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand + NavMenu)                |
/// +------------------------------------------+
/// |  main: hero, services, process, about,   |
/// |        testimonials, contact             |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header::Header />
        <main id="main" class="site-main">
            {children()}
        </main>
        <footer::Footer />
        <ToastRegion />
    }
}
