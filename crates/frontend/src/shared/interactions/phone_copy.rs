//! Touch-and-hold on a phone number copies it to the clipboard.

use super::{dom, SetupSkipped};
use crate::shared::toast::{ToastKind, ToastService};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::TouchEvent;

pub const PHONE_SELECTOR: &str = "[data-copy-phone]";

/// Pending long-press timer together with its callback `C`.
/// Cancelled timers never fire, and their callback is dropped right away.
#[derive(Debug)]
pub struct HoldGesture<C = Closure<dyn FnMut()>> {
    pending: Option<(i32, C)>,
}

impl<C> Default for HoldGesture<C> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<C> HoldGesture<C> {
    /// Remember a new timer; returns the previous one so it can be cleared
    pub fn start(&mut self, handle: i32, callback: C) -> Option<i32> {
        self.pending
            .replace((handle, callback))
            .map(|(previous, _)| previous)
    }

    /// Finger moved, lifted or the touch was cancelled
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending.take().map(|(handle, _)| handle)
    }

    /// Timer elapsed; `true` if the hold is still live
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

fn clipboard_available() -> bool {
    dom::window()
        .map(|w| dom::has_property(w.navigator().as_ref(), "clipboard"))
        .unwrap_or(false)
}

async fn copy(text: String, toasts: ToastService, hide_ms: u32) {
    let Ok(window) = dom::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    match JsFuture::from(promise).await {
        Ok(_) => toasts.show(ToastKind::Success, format!("Copied {}", text), hide_ms),
        Err(e) => {
            log::debug!("phone-copy: clipboard refused: {:?}", e);
            toasts.show(ToastKind::Error, "Could not copy the number", hide_ms);
        }
    }
}

pub fn init(hold_ms: u32, toasts: ToastService, toast_hide_ms: u32) -> Result<usize, SetupSkipped> {
    let phones = dom::query_all(PHONE_SELECTOR)?;
    let clipboard = clipboard_available();
    if !clipboard {
        log::debug!("phone-copy: no clipboard API, hold does nothing");
    }

    for phone in &phones {
        let gesture = Rc::new(RefCell::new(HoldGesture::default()));
        let text = phone
            .get_attribute("data-copy-phone")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| phone.text_content())
            .unwrap_or_default();

        let pressing = gesture.clone();
        dom::listen_passive(phone, "touchstart", move |_: TouchEvent| {
            if !clipboard {
                return;
            }
            let Ok(window) = dom::window() else {
                return;
            };
            let fired = pressing.clone();
            let copied = text.clone();
            let timer = Closure::once(move || {
                if fired.borrow_mut().fire() {
                    wasm_bindgen_futures::spawn_local(copy(copied, toasts, toast_hide_ms));
                }
            });
            let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                timer.as_ref().unchecked_ref(),
                i32::try_from(hold_ms).unwrap_or(i32::MAX),
            ) else {
                return;
            };
            // the gesture owns the callback until it fires or is cancelled
            if let Some(previous) = pressing.borrow_mut().start(handle, timer) {
                window.clear_timeout_with_handle(previous);
            }
        });

        for event in ["touchmove", "touchend", "touchcancel"] {
            let cancelling = gesture.clone();
            dom::listen_passive(phone, event, move |_: TouchEvent| {
                if let Some(handle) = cancelling.borrow_mut().cancel() {
                    if let Ok(window) = dom::window() {
                        window.clear_timeout_with_handle(handle);
                    }
                }
            });
        }
    }

    Ok(phones.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_fires_once() {
        let mut gesture = HoldGesture::<()>::default();
        assert_eq!(gesture.start(7, ()), None);
        assert!(gesture.fire());
        assert!(!gesture.fire());
    }

    #[test]
    fn test_cancelled_hold_never_fires() {
        let mut gesture = HoldGesture::<()>::default();
        gesture.start(3, ());
        assert_eq!(gesture.cancel(), Some(3));
        assert!(!gesture.is_pending());
        assert!(!gesture.fire());
        assert_eq!(gesture.cancel(), None);
    }

    #[test]
    fn test_restart_returns_previous_timer() {
        let mut gesture = HoldGesture::<()>::default();
        gesture.start(1, ());
        assert_eq!(gesture.start(2, ()), Some(1));
        assert!(gesture.is_pending());
    }

    #[test]
    fn test_cancel_and_restart_release_the_callback() {
        let callback = Rc::new(());
        let mut gesture = HoldGesture::default();

        gesture.start(1, callback.clone());
        assert_eq!(Rc::strong_count(&callback), 2);
        gesture.cancel();
        assert_eq!(Rc::strong_count(&callback), 1);

        gesture.start(2, callback.clone());
        gesture.start(3, callback.clone());
        assert_eq!(Rc::strong_count(&callback), 2);
        assert!(gesture.fire());
        assert_eq!(Rc::strong_count(&callback), 1);
    }
}
