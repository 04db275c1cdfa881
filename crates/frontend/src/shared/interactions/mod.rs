//! Page interaction controllers.
//!
//! Every controller is independent: it looks up its own elements, and if
//! they are missing (or a browser capability is absent) it skips its own
//! setup without affecting the others. [`init_all`] wires them exactly once.

pub mod counter;
pub mod dom;
pub mod frame_throttle;
pub mod parallax;
pub mod phone_copy;
pub mod reveal;
pub mod ripple;
pub mod scroll_spy;
pub mod tilt;

use crate::shared::toast::ToastService;
use contracts::shared::config::SiteConfig;
use std::cell::Cell;
use thiserror::Error;

/// Why a controller did not wire itself up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupSkipped {
    #[error("no window/document")]
    NoWindow,
    #[error("nothing matches `{0}`")]
    NoElements(String),
    #[error("{0} is not supported")]
    Unsupported(&'static str),
    #[error("reduced motion requested")]
    ReducedMotion,
}

/// Browser preferences and capabilities that decide how much to animate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPolicy {
    pub reduced_motion: bool,
    pub can_hover: bool,
    pub observer_available: bool,
}

impl MotionPolicy {
    pub fn detect() -> Self {
        let observer_available = dom::window()
            .map(|w| dom::has_property(w.as_ref(), "IntersectionObserver"))
            .unwrap_or(false);
        Self {
            reduced_motion: dom::media_matches("(prefers-reduced-motion: reduce)"),
            can_hover: !dom::media_matches("(hover: none)"),
            observer_available,
        }
    }

    /// Reveals and counters animate; otherwise they jump to their end state
    pub fn animate_reveals(&self) -> bool {
        self.observer_available && !self.reduced_motion
    }

    /// Ripple and parallax
    pub fn decorations_enabled(&self) -> bool {
        !self.reduced_motion
    }

    pub fn tilt_enabled(&self) -> bool {
        self.can_hover && !self.reduced_motion
    }
}

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

fn report(name: &str, result: Result<usize, SetupSkipped>) {
    match result {
        Ok(count) => log::debug!("{}: wired {} element(s)", name, count),
        Err(reason) => log::debug!("{}: skipped ({})", name, reason),
    }
}

/// Wire every controller. Subsequent calls are ignored.
pub fn init_all(config: &SiteConfig, toasts: ToastService) {
    if INITIALIZED.with(|flag| flag.replace(true)) {
        log::warn!("interactions already initialised, ignoring repeated call");
        return;
    }

    let policy = MotionPolicy::detect();
    log::debug!("motion policy: {:?}", policy);

    for group in &config.reveal {
        report(&format!("reveal:{}", group.name), reveal::init_group(group, policy));
    }
    report("counters", counter::init(&config.counters, &config.motion, policy));
    report(
        "ripple",
        ripple::init(ripple::RIPPLE_SELECTOR, config.motion.ripple_duration_ms, policy),
    );
    report("parallax", parallax::init(config.motion.parallax_reset_ms, policy));
    report(
        "tilt",
        tilt::init(config.motion.tilt_max_deg, config.motion.tilt_lift_px, policy),
    );
    report(
        "phone-copy",
        phone_copy::init(config.motion.long_press_ms, toasts, config.motion.toast_hide_ms),
    );
    report("scroll-spy", scroll_spy::init(&config.nav));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(reduced_motion: bool, can_hover: bool, observer_available: bool) -> MotionPolicy {
        MotionPolicy {
            reduced_motion,
            can_hover,
            observer_available,
        }
    }

    #[test]
    fn test_reduced_motion_disables_everything_animated() {
        let p = policy(true, true, true);
        assert!(!p.animate_reveals());
        assert!(!p.decorations_enabled());
        assert!(!p.tilt_enabled());
    }

    #[test]
    fn test_missing_observer_reveals_immediately() {
        let p = policy(false, true, false);
        assert!(!p.animate_reveals());
        assert!(p.decorations_enabled());
    }

    #[test]
    fn test_touch_devices_skip_tilt_only() {
        let p = policy(false, false, true);
        assert!(!p.tilt_enabled());
        assert!(p.animate_reveals());
        assert!(p.decorations_enabled());
    }

    #[test]
    fn test_skip_reasons_display() {
        assert_eq!(
            SetupSkipped::NoElements("[data-tilt]".into()).to_string(),
            "nothing matches `[data-tilt]`"
        );
        assert_eq!(
            SetupSkipped::Unsupported("IntersectionObserver").to_string(),
            "IntersectionObserver is not supported"
        );
    }
}
