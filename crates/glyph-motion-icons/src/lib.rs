//! Reference glyph timelines for glyph-motion-core.
//!
//! Each module describes one glyph kind as immutable, declarative data: the
//! sub-element geometry, the pose it holds in each state, and per-segment
//! timing. Timelines are shared across all instances of a kind; construct
//! one per kind and hand out `Rc` clones.
//!
//! ```
//! use glyph_motion_core::{AnimationState, IconConfig, PointerEvent};
//!
//! let mut icon = glyph_motion_icons::airplane::instance(IconConfig::new());
//! icon.pointer_enter(PointerEvent::enter([12.0, 12.0], 0.0));
//! assert_eq!(icon.state(), AnimationState::Animating);
//! let frame = icon.render();
//! assert_eq!(frame.size, 28.0);
//! ```

pub mod airplane;
pub mod arrow_right;
pub mod expand;
pub mod route;

/// Default linear pixel dimension shared by all reference glyphs.
pub const DEFAULT_SIZE: f32 = 28.0;

pub(crate) const VIEW_BOX: [f32; 4] = [0.0, 0.0, 24.0, 24.0];
