//! Pointer event contracts handed in by the host each gesture.
//!
//! The host event loop delivers enter/leave gestures in order; this crate
//! either consumes them (uncontrolled mode) or forwards them untouched to a
//! caller-supplied callback (controlled mode).

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PointerKind {
    Enter,
    Leave,
}

/// Raw pointer gesture as delivered by the host. Carried through unmodified
/// when forwarded to a caller callback.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Pointer position in host coordinates.
    pub position: [f32; 2],
    /// Host-supplied timestamp in seconds. Opaque to this crate.
    pub timestamp: f64,
}

impl PointerEvent {
    pub fn enter(position: [f32; 2], timestamp: f64) -> Self {
        Self {
            kind: PointerKind::Enter,
            position,
            timestamp,
        }
    }

    pub fn leave(position: [f32; 2], timestamp: f64) -> Self {
        Self {
            kind: PointerKind::Leave,
            position,
            timestamp,
        }
    }
}

/// Caller-supplied pointer callback, invoked only in controlled mode.
/// `FnMut` so integrators can count or accumulate gestures.
pub type PointerCallback = Box<dyn FnMut(&PointerEvent)>;
