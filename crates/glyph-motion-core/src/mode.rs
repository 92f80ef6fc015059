//! Mode detector: sticky controlled/uncontrolled duality per instance.

use serde::{Deserialize, Serialize};

/// Which trigger drives an instance's animation. Modeled as a tagged state
/// rather than a checked flag: the only transition is
/// `Uncontrolled -> Controlled`, taken at most once per instance lifetime.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ControlMode {
    /// Pointer hover gestures drive the animation directly.
    #[default]
    Uncontrolled,
    /// Animation is driven only by the exported imperative handle; pointer
    /// gestures are forwarded to the caller instead.
    Controlled,
}

/// Tracks whether an instance has been placed under imperative control.
/// Lazy: a consumer that never requests the handle leaves the instance
/// hover-driven. Sticky: once flipped, hover gestures permanently stop
/// driving the animation, even if the handle is later discarded.
#[derive(Debug, Default)]
pub struct ModeDetector {
    mode: ControlMode,
}

impl ModeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip to `Controlled`. Returns true only on the call that actually
    /// flipped; subsequent calls are idempotent with no side effects.
    pub fn acquire_control(&mut self) -> bool {
        match self.mode {
            ControlMode::Uncontrolled => {
                log::debug!("instance placed under imperative control");
                self.mode = ControlMode::Controlled;
                true
            }
            ControlMode::Controlled => false,
        }
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    #[inline]
    pub fn is_controlled(&self) -> bool {
        self.mode == ControlMode::Controlled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_is_sticky_and_idempotent() {
        let mut det = ModeDetector::new();
        assert!(!det.is_controlled());
        assert!(det.acquire_control());
        assert!(det.is_controlled());
        assert!(!det.acquire_control());
        assert!(det.is_controlled());
    }
}
