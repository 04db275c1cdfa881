//! DOM query helpers for the interaction controllers.

use super::SetupSkipped;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, SetupSkipped> {
    web_sys::window().ok_or(SetupSkipped::NoWindow)
}

pub fn document() -> Result<Document, SetupSkipped> {
    window()?.document().ok_or(SetupSkipped::NoWindow)
}

/// All elements matching `selector`. An empty match is an error so callers
/// can abort their own setup with `?`.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>, SetupSkipped> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|_| SetupSkipped::NoElements(selector.to_string()))?;

    let found: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    if found.is_empty() {
        Err(SetupSkipped::NoElements(selector.to_string()))
    } else {
        Ok(found)
    }
}

/// First element matching `selector`, if any
pub fn query_one(selector: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Descendants of `root` matching `selector` (possibly empty)
pub fn query_within(root: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn media_matches(query: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

/// Whether `target` exposes a property named `name` (capability probe)
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn clear_style(el: &HtmlElement, property: &str) {
    let _ = el.style().remove_property(property);
}

/// Attach a listener for the page lifetime.
///
/// Note: the closure is leaked on purpose, listeners live as long as the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`listen`] but registered as passive (scroll, touch)
pub fn listen_passive<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Run `work` on the next animation frame. Returns `false` if it could not be scheduled.
pub fn request_frame(work: impl FnOnce(f64) + 'static) -> bool {
    let Ok(window) = window() else {
        return false;
    };
    let callback = Closure::once_into_js(work);
    window
        .request_animation_frame(callback.unchecked_ref())
        .is_ok()
}
