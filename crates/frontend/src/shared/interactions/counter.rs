//! Animated number counters (`data-count`, optional `data-suffix`).

use super::reveal::{observe_visibility, position_of, RevealTracker};
use super::{dom, MotionPolicy, SetupSkipped};
use contracts::shared::config::{CounterConfig, MotionConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// `1 - 2^(-10t)`, with `t >= 1` mapped to exactly 1
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else if t <= 0.0 {
        0.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, suffix: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            target,
            suffix: suffix.into(),
            duration_ms: f64::from(duration_ms),
        }
    }

    /// Build from the element's data attributes; `None` for a non-numeric target
    pub fn from_attrs(count: &str, suffix: Option<String>, duration_ms: u32) -> Option<Self> {
        let target = count.trim().parse::<u64>().ok()?;
        Some(Self::new(target, suffix.unwrap_or_default(), duration_ms))
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Displayed integer; never above the target, exactly the target when finished
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let t = self.progress(elapsed_ms);
        if t >= 1.0 {
            return self.target;
        }
        let value = (self.target as f64 * ease_out_expo(t)).floor() as u64;
        value.min(self.target)
    }

    pub fn text_at(&self, elapsed_ms: f64) -> String {
        format!("{}{}", self.value_at(elapsed_ms), self.suffix)
    }

    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

/// Drive `animation` on `el` with animation frames until it finishes
fn run(el: HtmlElement, animation: CounterAnimation) {
    let Ok(window) = dom::window() else {
        el.set_text_content(Some(&animation.final_text()));
        return;
    };

    let started = Rc::new(Cell::new(None::<f64>));
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let start = started.get().unwrap_or(now);
        started.set(Some(start));
        let elapsed = now - start;

        el.set_text_content(Some(&animation.text_at(elapsed)));

        if animation.is_finished(elapsed) {
            // drops this closure, breaking the Rc cycle
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    };
}

pub fn init(
    counters: &CounterConfig,
    motion: &MotionConfig,
    policy: MotionPolicy,
) -> Result<usize, SetupSkipped> {
    let candidates = dom::query_all(&counters.selector)?;

    let mut elements = Vec::new();
    let mut animations = Vec::new();
    for el in candidates {
        let count = el.get_attribute("data-count").unwrap_or_default();
        let suffix = el.get_attribute("data-suffix");
        match CounterAnimation::from_attrs(&count, suffix, motion.counter_duration_ms) {
            Some(animation) => {
                elements.push(el);
                animations.push(animation);
            }
            None => log::warn!("counter: ignoring non-numeric data-count {:?}", count),
        }
    }
    if elements.is_empty() {
        return Err(SetupSkipped::NoElements(counters.selector.clone()));
    }
    let count = elements.len();

    if !policy.animate_reveals() {
        for (el, animation) in elements.iter().zip(&animations) {
            el.set_text_content(Some(&animation.final_text()));
        }
        return Ok(count);
    }

    for (el, animation) in elements.iter().zip(&animations) {
        el.set_text_content(Some(&animation.text_at(0.0)));
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(count, counters.threshold)));
    let observed = elements.clone();
    observe_visibility(
        &elements,
        counters.threshold,
        "0px",
        move |observer, target, ratio, intersecting| {
            let Some(index) = position_of(&observed, target) else {
                return;
            };
            if tracker.borrow_mut().observe(index, ratio, intersecting) {
                observer.unobserve(target);
                run(observed[index].clone(), animations[index].clone());
            }
        },
    )?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_expo_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(1.5), 1.0);
        assert!(ease_out_expo(0.999) < 1.0);
        assert!((ease_out_expo(0.5) - (1.0 - 2f64.powi(-5))).abs() < 1e-12);
    }

    #[test]
    fn test_counter_reaches_exact_target() {
        let animation = CounterAnimation::new(98, "%", 1600);
        assert_eq!(animation.text_at(0.0), "0%");
        assert_eq!(animation.text_at(1600.0), "98%");
        assert_eq!(animation.text_at(5000.0), "98%");
        assert_eq!(animation.final_text(), "98%");
    }

    #[test]
    fn test_counter_never_overshoots_and_is_monotonic() {
        let animation = CounterAnimation::new(98, "%", 1600);
        let mut previous = 0;
        let mut elapsed = 0.0;
        while elapsed <= 1700.0 {
            let value = animation.value_at(elapsed);
            assert!(value <= 98, "{} at {}ms", value, elapsed);
            assert!(value >= previous);
            previous = value;
            elapsed += 16.7;
        }
        assert_eq!(previous, 98);
    }

    #[test]
    fn test_from_attrs() {
        let animation = CounterAnimation::from_attrs(" 340 ", None, 1600).unwrap();
        assert_eq!(animation.final_text(), "340");
        assert!(CounterAnimation::from_attrs("12k", Some("+".into()), 1600).is_none());
    }

    #[test]
    fn test_zero_duration_is_immediately_finished() {
        let animation = CounterAnimation::new(12, "+", 0);
        assert!(animation.is_finished(0.0));
        assert_eq!(animation.text_at(0.0), "12+");
    }
}
