//! Scroll-driven chrome: active nav link, compact header, back-to-top control.

use super::frame_throttle::FrameThrottle;
use super::{dom, SetupSkipped};
use contracts::shared::config::NavConfig;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};

pub const NAV_LINK_SELECTOR: &str = "[data-nav-link]";
pub const HEADER_SELECTOR: &str = ".site-header";
pub const BACK_TO_TOP_SELECTOR: &str = "[data-back-to-top]";
pub const ACTIVE_CLASS: &str = "is-active";

/// Id of the last section whose top has passed `scroll_y + offset`.
/// `sections` must be in document order.
pub fn active_section(sections: &[(String, f64)], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= scroll_y + offset)
        .map(|(id, _)| id.as_str())
}

struct SpyLink {
    link: HtmlElement,
    section_id: String,
    section: HtmlElement,
}

fn collect_links() -> Result<Vec<SpyLink>, SetupSkipped> {
    let document = dom::document()?;
    let links: Vec<SpyLink> = dom::query_all(NAV_LINK_SELECTOR)?
        .into_iter()
        .filter_map(|link| {
            let href = link.get_attribute("href")?;
            let section_id = href.strip_prefix('#')?.to_string();
            let section = document
                .get_element_by_id(&section_id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())?;
            Some(SpyLink {
                link,
                section_id,
                section,
            })
        })
        .collect();

    if links.is_empty() {
        Err(SetupSkipped::NoElements(format!("{} → #section", NAV_LINK_SELECTOR)))
    } else {
        Ok(links)
    }
}

fn apply(links: &[SpyLink], header: Option<&HtmlElement>, back_to_top: Option<&HtmlElement>, nav: &NavConfig) {
    let Ok(window) = dom::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let sections: Vec<(String, f64)> = links
        .iter()
        .map(|l| {
            let top = l.section.get_bounding_client_rect().top() + scroll_y;
            (l.section_id.clone(), top)
        })
        .collect();
    let current = active_section(&sections, scroll_y, nav.header_offset_px);

    for l in links {
        let is_current = current == Some(l.section_id.as_str());
        let _ = l.link.class_list().toggle_with_force(ACTIVE_CLASS, is_current);
        if is_current {
            let _ = l.link.set_attribute("aria-current", "page");
        } else {
            let _ = l.link.remove_attribute("aria-current");
        }
    }

    if let Some(header) = header {
        let _ = header
            .class_list()
            .toggle_with_force("is-scrolled", scroll_y > nav.scrolled_after_px);
    }
    if let Some(button) = back_to_top {
        let _ = button
            .class_list()
            .toggle_with_force("is-visible", scroll_y > nav.back_to_top_after_px);
    }
}

pub fn init(nav: &NavConfig) -> Result<usize, SetupSkipped> {
    let window = dom::window()?;
    let links = std::rc::Rc::new(collect_links()?);
    let header = dom::query_one(HEADER_SELECTOR);
    let back_to_top = dom::query_one(BACK_TO_TOP_SELECTOR);
    let count = links.len();

    apply(&links, header.as_ref(), back_to_top.as_ref(), nav);

    let throttle = FrameThrottle::new();
    let nav = nav.clone();
    let on_scroll = move |_: Event| {
        let links = links.clone();
        let header = header.clone();
        let back_to_top = back_to_top.clone();
        let nav = nav.clone();
        throttle.schedule(move || apply(&links, header.as_ref(), back_to_top.as_ref(), &nav));
    };
    let on_resize = on_scroll.clone();
    dom::listen_passive(&window, "scroll", on_scroll);
    dom::listen_passive(&window, "resize", on_resize);

    Ok(count)
}

/// Scroll to the top of the page; instant under reduced motion
pub fn scroll_to_top(reduced_motion: bool) {
    let Ok(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(if reduced_motion {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    });
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("services".to_string(), 800.0),
            ("contact".to_string(), 2000.0),
        ]
    }

    #[test]
    fn test_active_section_follows_scroll() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 96.0), Some("home"));
        assert_eq!(active_section(&s, 703.0, 96.0), Some("home"));
        assert_eq!(active_section(&s, 704.0, 96.0), Some("services"));
        assert_eq!(active_section(&s, 5000.0, 96.0), Some("contact"));
    }

    #[test]
    fn test_no_section_above_offset() {
        let s = vec![("intro".to_string(), 500.0)];
        assert_eq!(active_section(&s, 0.0, 96.0), None);
        assert_eq!(active_section(&[], 0.0, 96.0), None);
    }
}
