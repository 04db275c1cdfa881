use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Clear `slot` only if it still shows toast `id`
fn clear_if_current(slot: &mut Option<Toast>, id: u32) -> bool {
    if slot.as_ref().map(|t| t.id) == Some(id) {
        *slot = None;
        true
    } else {
        false
    }
}

/// Сервис коротких уведомлений: одно уведомление за раз, автоскрытие по таймеру
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    /// Показать уведомление и скрыть его через `hide_after_ms`
    pub fn show(&self, kind: ToastKind, text: impl Into<String>, hide_after_ms: u32) {
        let id = self.next_id.get_value().wrapping_add(1);
        self.next_id.set_value(id);
        self.current.set(Some(Toast {
            id,
            kind,
            text: text.into(),
        }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(hide_after_ms).await;
            current.update(|slot| {
                clear_if_current(slot, id);
            });
        });
    }

    pub fn hide(&self) {
        self.current.set(None);
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Polite live region; always present in the DOM so screen readers pick up changes
#[component]
pub fn ToastRegion() -> impl IntoView {
    let toasts = use_context::<ToastService>().unwrap_or_default();

    view! {
        <div class="toast-region" role="status" aria-live="polite" aria-atomic="true">
            {move || toasts.current.get().map(|toast| {
                let class = toast.kind.css_class();
                view! {
                    <div class=class on:click=move |_| toasts.hide()>
                        {toast.text}
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32) -> Option<Toast> {
        Some(Toast {
            id,
            kind: ToastKind::Success,
            text: "Copied".to_string(),
        })
    }

    #[test]
    fn test_kinds_are_styled_apart() {
        assert_eq!(ToastKind::Success.css_class(), "toast toast--success");
        assert_eq!(ToastKind::Error.css_class(), "toast toast--error");
    }

    #[test]
    fn test_stale_timer_keeps_newer_toast() {
        let mut slot = toast(2);
        assert!(!clear_if_current(&mut slot, 1));
        assert_eq!(slot, toast(2));
        assert!(clear_if_current(&mut slot, 2));
        assert_eq!(slot, None);
        assert!(!clear_if_current(&mut slot, 2));
    }
}
