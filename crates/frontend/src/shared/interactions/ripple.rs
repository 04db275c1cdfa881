use super::{dom, MotionPolicy, SetupSkipped};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

pub const RIPPLE_SELECTOR: &str = "[data-ripple]";

/// Circle covering the control, centred on the pointer (element-relative px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn new(width: f64, height: f64, offset_x: f64, offset_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: offset_x - size / 2.0,
            top: offset_y - size / 2.0,
        }
    }

    /// Keyboard activation has no pointer position: start from the centre
    pub fn centered(width: f64, height: f64) -> Self {
        Self::new(width, height, width / 2.0, height / 2.0)
    }
}

fn spawn_ripple(host: &HtmlElement, ev: &MouseEvent, duration_ms: u32) {
    let rect = host.get_bounding_client_rect();
    let geometry = if ev.detail() == 0 {
        RippleGeometry::centered(rect.width(), rect.height())
    } else {
        RippleGeometry::new(
            rect.width(),
            rect.height(),
            f64::from(ev.client_x()) - rect.left(),
            f64::from(ev.client_y()) - rect.top(),
        )
    };

    let Some(ripple) = dom::document()
        .ok()
        .and_then(|doc| doc.create_element("span").ok())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    ripple.set_class_name("ripple");
    let _ = ripple.set_attribute("aria-hidden", "true");
    dom::set_style(&ripple, "width", &format!("{:.1}px", geometry.size));
    dom::set_style(&ripple, "height", &format!("{:.1}px", geometry.size));
    dom::set_style(&ripple, "left", &format!("{:.1}px", geometry.left));
    dom::set_style(&ripple, "top", &format!("{:.1}px", geometry.top));
    dom::set_style(&ripple, "animation-duration", &format!("{}ms", duration_ms));

    if host.append_child(&ripple).is_err() {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        ripple.remove();
    });
}

pub fn init(selector: &str, duration_ms: u32, policy: MotionPolicy) -> Result<usize, SetupSkipped> {
    if !policy.decorations_enabled() {
        return Err(SetupSkipped::ReducedMotion);
    }
    let controls = dom::query_all(selector)?;
    for control in &controls {
        let host = control.clone();
        dom::listen(control, "click", move |ev: MouseEvent| {
            spawn_ripple(&host, &ev, duration_ms);
        });
    }
    Ok(controls.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_uses_larger_dimension() {
        let g = RippleGeometry::new(200.0, 48.0, 20.0, 10.0);
        assert_eq!(g.size, 200.0);
        assert_eq!(g.left, -80.0);
        assert_eq!(g.top, -90.0);
    }

    #[test]
    fn test_centered_ripple() {
        let g = RippleGeometry::centered(120.0, 40.0);
        assert_eq!(g.size, 120.0);
        assert_eq!(g.left, 0.0);
        assert_eq!(g.top, -40.0);
    }
}
