//! Glyph Motion Core (host-agnostic)
//!
//! Controller pattern for small, stateful, animatable glyph widgets with two
//! mutually exclusive trigger modes per instance: pointer hover gestures
//! (uncontrolled) or an exported imperative handle (controlled). This crate
//! owns the state machine, mode detection, event dispatch, and the pure
//! projection from state + timeline data to a visual description; it never
//! owns timers or frame interpolation, which belong to the host renderer.

pub mod events;
pub mod handle;
pub mod instance;
pub mod mode;
pub mod project;
pub mod state;
pub mod stored_timeline;
pub mod timeline;

// Re-exports for consumers (hosts and glyph data crates)
pub use events::{PointerCallback, PointerEvent, PointerKind};
pub use handle::IconHandle;
pub use instance::{IconConfig, IconFrame, IconInstance};
pub use mode::{ControlMode, ModeDetector};
pub use project::{project, RenderedElement, VisualDescription};
pub use state::{AnimationState, SharedStateStore, StateStore};
pub use stored_timeline::parse_timeline_json;
pub use timeline::{Easing, Element, Pose, Segment, ShapeTimeline, TimelineError, Timing};
