use super::{dom, MotionPolicy, SetupSkipped};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, MouseEvent};

pub const HERO_SELECTOR: &str = "[data-parallax]";
pub const LAYER_SELECTOR: &str = "[data-depth]";

/// Pointer position within `[start, start + extent]` mapped to `-0.5..=0.5`
pub fn normalized(pointer: f64, start: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    ((pointer - start) / extent - 0.5).clamp(-0.5, 0.5)
}

pub fn layer_transform(nx: f64, ny: f64, depth: f64) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", nx * depth, ny * depth)
}

/// Numbers pointer-leave resets so only the latest one clears the transition
#[derive(Debug, Default)]
pub struct ResetGeneration {
    current: u32,
}

impl ResetGeneration {
    pub fn begin(&mut self) -> u32 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, generation: u32) -> bool {
        self.current == generation
    }
}

struct Layer {
    el: HtmlElement,
    depth: f64,
}

pub fn init(reset_ms: u32, policy: MotionPolicy) -> Result<usize, SetupSkipped> {
    if !policy.decorations_enabled() {
        return Err(SetupSkipped::ReducedMotion);
    }
    let hero = dom::query_one(HERO_SELECTOR)
        .ok_or_else(|| SetupSkipped::NoElements(HERO_SELECTOR.to_string()))?;

    let layers: Vec<Layer> = dom::query_within(&hero, LAYER_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let depth = el.get_attribute("data-depth")?.trim().parse::<f64>().ok()?;
            Some(Layer { el, depth })
        })
        .collect();
    if layers.is_empty() {
        return Err(SetupSkipped::NoElements(LAYER_SELECTOR.to_string()));
    }
    let count = layers.len();
    let layers = Rc::new(layers);
    let resets = Rc::new(RefCell::new(ResetGeneration::default()));

    let area = hero.clone();
    let moving = layers.clone();
    dom::listen(&hero, "mousemove", move |ev: MouseEvent| {
        let rect = area.get_bounding_client_rect();
        let nx = normalized(f64::from(ev.client_x()), rect.left(), rect.width());
        let ny = normalized(f64::from(ev.client_y()), rect.top(), rect.height());
        for layer in moving.iter() {
            dom::set_style(&layer.el, "transform", &layer_transform(nx, ny, layer.depth));
        }
    });

    dom::listen(&hero, "mouseleave", move |_: MouseEvent| {
        for layer in layers.iter() {
            dom::set_style(&layer.el, "transition", &format!("transform {}ms ease-out", reset_ms));
            dom::set_style(&layer.el, "transform", "translate3d(0, 0, 0)");
        }
        let generation = resets.borrow_mut().begin();
        let settled = layers.clone();
        let resets = resets.clone();
        spawn_local(async move {
            TimeoutFuture::new(reset_ms).await;
            if !resets.borrow().is_current(generation) {
                return;
            }
            for layer in settled.iter() {
                dom::clear_style(&layer.el, "transition");
            }
        });
    });

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_reset_is_current() {
        let mut resets = ResetGeneration::default();
        let first = resets.begin();
        assert!(resets.is_current(first));

        // pointer came back and left again before the first reset finished
        let second = resets.begin();
        assert!(!resets.is_current(first));
        assert!(resets.is_current(second));
    }

    #[test]
    fn test_normalized_range() {
        assert_eq!(normalized(100.0, 100.0, 400.0), -0.5);
        assert_eq!(normalized(300.0, 100.0, 400.0), 0.0);
        assert_eq!(normalized(500.0, 100.0, 400.0), 0.5);
        assert_eq!(normalized(900.0, 100.0, 400.0), 0.5);
        assert_eq!(normalized(10.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_layer_transform_scales_by_depth() {
        assert_eq!(layer_transform(0.5, -0.25, 40.0), "translate3d(20.00px, -10.00px, 0)");
        assert_eq!(layer_transform(0.0, 0.0, 40.0), "translate3d(0.00px, 0.00px, 0)");
    }
}
