use crate::shared::icons::icon;
use crate::shared::interactions::frame_throttle::FrameThrottle;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// (section id, label), in page order
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("process", "How we work"),
    ("about", "About"),
    ("testimonials", "Clients"),
    ("contact", "Contact"),
];

/// The burger menu only exists below the breakpoint; wider viewports close it
pub fn should_close_on_resize(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width > breakpoint_px
}

#[component]
pub fn NavMenu() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let breakpoint = config.nav.menu_breakpoint_px;
    let open = RwSignal::new(false);

    // Keep body scroll locked while the menu covers the page
    Effect::new(move |_| {
        let is_open = open.get();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let _ = body.class_list().toggle_with_force("menu-open", is_open);
        }
    });

    // Escape and resize close the menu
    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };

        let keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && open.get_untracked() {
                    open.set(false);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        keydown.forget();

        let throttle = FrameThrottle::new();
        let resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
            throttle.schedule(move || {
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                if should_close_on_resize(width, breakpoint) && open.get_untracked() {
                    open.set(false);
                }
            });
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        resize.forget();
    });

    view! {
        <button
            class="nav-toggle"
            type="button"
            aria-controls="site-nav"
            aria-expanded=move || if open.get() { "true" } else { "false" }
            aria-label=move || if open.get() { "Close menu" } else { "Open menu" }
            on:click=move |_| open.update(|o| *o = !*o)
        >
            {move || if open.get() { icon("x") } else { icon("menu") }}
        </button>
        <nav id="site-nav" class=move || if open.get() { "site-nav is-open" } else { "site-nav" }>
            <ul class="site-nav__list">
                {NAV_LINKS.into_iter().map(|(id, label)| view! {
                    <li>
                        <a
                            class="site-nav__link"
                            href=format!("#{}", id)
                            data-nav-link=""
                            on:click=move |_| open.set(false)
                        >
                            {label}
                        </a>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_past_breakpoint_closes_menu() {
        assert!(should_close_on_resize(1200.0, 900.0));
        assert!(!should_close_on_resize(900.0, 900.0));
        assert!(!should_close_on_resize(375.0, 900.0));
    }

    #[test]
    fn test_nav_links_are_unique_sections() {
        let mut ids: Vec<&str> = NAV_LINKS.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}
