//! Exported imperative handle: the capability object for controlled mode.

use crate::state::{AnimationState, SharedStateStore};

/// Capability object bound to one instance's state store, obtained through
/// [`crate::IconInstance::handle`]. Obtaining it is what flips the instance
/// to controlled mode; the handle itself only exposes start/stop.
///
/// Cloneable, and valid regardless of current state: `start_animation` while
/// already animating restarts the visual transition from its initial pose
/// (the state is unchanged but the store's epoch advances). A handle that
/// outlives its instance keeps only the small state cell alive; operating it
/// then mutates state nothing renders, which is harmless.
#[derive(Clone, Debug)]
pub struct IconHandle {
    store: SharedStateStore,
}

impl IconHandle {
    pub(crate) fn new(store: SharedStateStore) -> Self {
        Self { store }
    }

    /// Drive the glyph to its animating pose.
    pub fn start_animation(&self) {
        self.store.borrow_mut().transition(AnimationState::Animating);
    }

    /// Drive the glyph back to its normal pose. Always results in `Normal`,
    /// whatever the current state.
    pub fn stop_animation(&self) {
        self.store.borrow_mut().transition(AnimationState::Normal);
    }
}
