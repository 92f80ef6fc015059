//! Animation state store: the two-state machine one icon instance owns.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Visual state of one icon instance. Exactly one value at any time.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Normal,
    Animating,
}

/// Holds the current [`AnimationState`] plus a monotonically increasing
/// epoch. Every `transition` bumps the epoch, including a transition to the
/// state already held: a same-state transition restarts the visual
/// interpolation from its defined initial pose, and the epoch is the signal
/// hosts use to re-trigger it.
#[derive(Debug, Default)]
pub struct StateStore {
    state: AnimationState,
    epoch: u64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state to `target` and signal a recompute. Never fails; any
    /// target is accepted regardless of the current state.
    pub fn transition(&mut self, target: AnimationState) {
        self.epoch = self.epoch.wrapping_add(1);
        log::trace!(
            "state transition {:?} -> {:?} (epoch {})",
            self.state,
            target,
            self.epoch
        );
        self.state = target;
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Number of transitions requested so far. Advances on every
    /// `transition`, same-state or not.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Cloneable single-threaded handle to a [`StateStore`], shared between an
/// instance and any exported [`crate::IconHandle`]s. The host loop is
/// single-threaded and cooperative, so interior mutability is sufficient.
pub type SharedStateStore = Rc<RefCell<StateStore>>;

/// Fresh store starting in `Normal` at epoch 0.
pub fn shared_state_store() -> SharedStateStore {
    Rc::new(RefCell::new(StateStore::new()))
}
