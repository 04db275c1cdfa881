//! Reveal-on-scroll: one parameterised controller per configured group.
//!
//! Each observed element goes `Pending → Revealed` exactly once, when its
//! visible ratio crosses the group threshold. Revealed is terminal: the
//! element gets [`VISIBLE_CLASS`] and is no longer observed.

use super::{dom, MotionPolicy, SetupSkipped};
use contracts::shared::config::RevealGroupConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const VISIBLE_CLASS: &str = "is-visible";

/// Observers report ratios like 0.1499 for a 0.15 threshold crossing
const RATIO_EPSILON: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// One-shot visibility tracker for a group of elements
#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    threshold: f64,
}

impl RevealTracker {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            states: vec![RevealState::Pending; count],
            threshold,
        }
    }

    /// Feed a visibility signal for element `index`.
    /// Returns `true` only on the `Pending → Revealed` transition.
    pub fn observe(&mut self, index: usize, ratio: f64, intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if *state == RevealState::Revealed || !intersecting {
            return false;
        }
        if ratio + RATIO_EPSILON < self.threshold {
            return false;
        }
        *state = RevealState::Revealed;
        true
    }

    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }
}

/// Transition delay of the `index`-th element in a staggered group
pub fn stagger_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// Show an element in its end state without animating
pub fn force_reveal(el: &HtmlElement) {
    dom::set_style(el, "transition", "none");
    let _ = el.class_list().add_1(VISIBLE_CLASS);
}

/// Visibility observer that hands every entry's (target, ratio, intersecting) to `on_entry`.
pub(crate) fn observe_visibility(
    elements: &[HtmlElement],
    threshold: f64,
    root_margin: &str,
    mut on_entry: impl FnMut(&IntersectionObserver, &web_sys::Element, f64, bool) + 'static,
) -> Result<(), SetupSkipped> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(
                    &observer,
                    &entry.target(),
                    entry.intersection_ratio(),
                    entry.is_intersecting(),
                );
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|_| SetupSkipped::Unsupported("IntersectionObserver"))?;
    for el in elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

/// Index of `target` in `elements`
pub(crate) fn position_of(elements: &[HtmlElement], target: &web_sys::Element) -> Option<usize> {
    elements.iter().position(|el| el.is_same_node(Some(target.as_ref())))
}

/// Wire one reveal group. Without an observer, or under reduced motion,
/// every element is shown immediately.
pub fn init_group(group: &RevealGroupConfig, policy: MotionPolicy) -> Result<usize, SetupSkipped> {
    let elements = dom::query_all(&group.selector)?;
    let count = elements.len();

    if !policy.animate_reveals() {
        elements.iter().for_each(force_reveal);
        return Ok(count);
    }

    if group.stagger_ms > 0 {
        for (i, el) in elements.iter().enumerate() {
            let delay = stagger_delay_ms(i, group.stagger_ms);
            dom::set_style(el, "transition-delay", &format!("{}ms", delay));
        }
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(count, group.threshold)));
    let observed = elements.clone();
    let wired = observe_visibility(
        &elements,
        group.threshold,
        &group.root_margin,
        move |observer, target, ratio, intersecting| {
            let Some(index) = position_of(&observed, target) else {
                return;
            };
            if tracker.borrow_mut().observe(index, ratio, intersecting) {
                let _ = target.class_list().add_1(VISIBLE_CLASS);
                observer.unobserve(target);
            }
        },
    );

    if let Err(e) = wired {
        // Observer refused the options: show content rather than leave it hidden
        elements.iter().for_each(force_reveal);
        return Err(e);
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(2, 0.25);
        assert!(!tracker.observe(0, 0.1, true));
        assert_eq!(tracker.state(0), Some(RevealState::Pending));

        assert!(tracker.observe(0, 0.3, true));
        assert_eq!(tracker.state(0), Some(RevealState::Revealed));

        // scrolled out and back in
        assert!(!tracker.observe(0, 0.0, false));
        assert!(!tracker.observe(0, 0.9, true));
        assert_eq!(tracker.state(0), Some(RevealState::Revealed));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_threshold_crossing_tolerates_rounding() {
        let mut tracker = RevealTracker::new(1, 0.15);
        assert!(tracker.observe(0, 0.1499, true));
    }

    #[test]
    fn test_not_intersecting_never_reveals() {
        let mut tracker = RevealTracker::new(1, 0.08);
        assert!(!tracker.observe(0, 1.0, false));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1, 0.5);
        assert!(!tracker.observe(3, 1.0, true));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 120), 0);
        assert_eq!(stagger_delay_ms(3, 120), 360);
        assert_eq!(stagger_delay_ms(5, 0), 0);
    }
}
