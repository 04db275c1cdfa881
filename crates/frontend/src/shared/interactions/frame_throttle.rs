use super::dom;
use std::cell::Cell;
use std::rc::Rc;

/// Keeps at most one pending animation-frame callback for a noisy event
/// source (scroll, resize). Events arriving while a frame is pending are dropped.
#[derive(Clone, Default)]
pub struct FrameThrottle {
    in_flight: Rc<Cell<bool>>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    fn try_acquire(&self) -> bool {
        !self.in_flight.replace(true)
    }

    fn release(&self) {
        self.in_flight.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.get()
    }

    /// Schedule `work` for the next frame unless one is already pending.
    pub fn schedule(&self, work: impl FnOnce() + 'static) -> bool {
        if !self.try_acquire() {
            return false;
        }

        let guard = self.clone();
        let scheduled = dom::request_frame(move |_| {
            guard.release();
            work();
        });
        if !scheduled {
            self.release();
        }
        scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pending_frame() {
        let throttle = FrameThrottle::new();
        assert!(throttle.try_acquire());
        assert!(throttle.is_pending());
        assert!(!throttle.try_acquire());
        assert!(!throttle.clone().try_acquire());

        throttle.release();
        assert!(!throttle.is_pending());
        assert!(throttle.try_acquire());
    }
}
