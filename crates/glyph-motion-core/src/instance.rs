//! Icon instance: the unit of ownership, and the event dispatcher deciding
//! whether a pointer gesture drives the animation or is forwarded.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::events::{PointerCallback, PointerEvent, PointerKind};
use crate::handle::IconHandle;
use crate::mode::{ControlMode, ModeDetector};
use crate::project::{project, VisualDescription};
use crate::state::{shared_state_store, AnimationState, SharedStateStore};
use crate::timeline::ShapeTimeline;

/// Construction parameters. All optional; anything omitted falls back to a
/// default and never signals an error.
#[derive(Default)]
pub struct IconConfig {
    /// Linear pixel dimension. `None` uses the timeline's `default_size`.
    pub size: Option<f32>,
    /// Opaque style token passed through to the host, not interpreted.
    pub class_name: Option<String>,
    /// Other host presentational attributes, passed through unmodified.
    pub attrs: Vec<(String, String)>,
    /// Invoked on pointer-enter, only in controlled mode.
    pub on_mouse_enter: Option<PointerCallback>,
    /// Invoked on pointer-leave, only in controlled mode.
    pub on_mouse_leave: Option<PointerCallback>,
}

impl IconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn on_mouse_enter(mut self, cb: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_mouse_enter = Some(Box::new(cb));
        self
    }

    pub fn on_mouse_leave(mut self, cb: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_mouse_leave = Some(Box::new(cb));
        self
    }
}

/// One frame's worth of rendering instructions for an instance: the pure
/// projection plus the instance-level presentation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconFrame {
    /// Transition counter from the state store. Advances on every
    /// transition, same-state or not; hosts re-trigger in-flight
    /// interpolation whenever it changes.
    pub epoch: u64,
    pub size: f32,
    pub class_name: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub visual: VisualDescription,
}

/// One runtime occurrence of an animated glyph widget. Owns its state and
/// mode exclusively; the timeline is shared, read-only reference data.
///
/// Created when the widget mounts, dropped when it unmounts. No background
/// work outlives it: dropping releases the Rc references and nothing else.
pub struct IconInstance {
    store: SharedStateStore,
    mode: ModeDetector,
    timeline: Rc<ShapeTimeline>,
    size: f32,
    class_name: Option<String>,
    attrs: Vec<(String, String)>,
    on_mouse_enter: Option<PointerCallback>,
    on_mouse_leave: Option<PointerCallback>,
}

impl IconInstance {
    pub fn new(timeline: Rc<ShapeTimeline>, config: IconConfig) -> Self {
        let size = config.size.unwrap_or(timeline.default_size);
        Self {
            store: shared_state_store(),
            mode: ModeDetector::new(),
            timeline,
            size,
            class_name: config.class_name,
            attrs: config.attrs,
            on_mouse_enter: config.on_mouse_enter,
            on_mouse_leave: config.on_mouse_leave,
        }
    }

    /// Pointer gesture from the host, dispatched on the event's own kind.
    ///
    /// Uncontrolled: enter drives the state to `Animating`, leave back to
    /// `Normal`; the caller's callbacks are never invoked. Controlled:
    /// forwards the raw event to the matching callback if supplied and
    /// never mutates state.
    pub fn pointer_event(&mut self, event: PointerEvent) {
        if !self.mode.is_controlled() {
            let target = match event.kind {
                PointerKind::Enter => AnimationState::Animating,
                PointerKind::Leave => AnimationState::Normal,
            };
            self.store.borrow_mut().transition(target);
        } else {
            let cb = match event.kind {
                PointerKind::Enter => self.on_mouse_enter.as_mut(),
                PointerKind::Leave => self.on_mouse_leave.as_mut(),
            };
            if let Some(cb) = cb {
                cb(&event);
            }
        }
    }

    /// Convenience entry point for hosts wiring enter handlers. The event's
    /// kind stays authoritative, so a mislabeled gesture degrades to its
    /// own behavior rather than panicking.
    pub fn pointer_enter(&mut self, event: PointerEvent) {
        self.pointer_event(event);
    }

    /// Convenience entry point for hosts wiring leave handlers.
    pub fn pointer_leave(&mut self, event: PointerEvent) {
        self.pointer_event(event);
    }

    /// Export the imperative capability object. The first call permanently
    /// flips this instance to controlled mode, even if the returned handle
    /// is never used; later calls return an equivalent handle with no
    /// further side effects.
    pub fn handle(&mut self) -> IconHandle {
        self.mode.acquire_control();
        IconHandle::new(Rc::clone(&self.store))
    }

    /// Recompute the rendering instructions for the current state.
    pub fn render(&self) -> IconFrame {
        let store = self.store.borrow();
        IconFrame {
            epoch: store.epoch(),
            size: self.size,
            class_name: self.class_name.clone(),
            attrs: self.attrs.clone(),
            visual: project(store.state(), &self.timeline),
        }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.store.borrow().state()
    }

    #[inline]
    pub fn epoch(&self) -> u64 {
        self.store.borrow().epoch()
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode.mode()
    }

    #[inline]
    pub fn is_controlled(&self) -> bool {
        self.mode.is_controlled()
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[inline]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    #[inline]
    pub fn timeline(&self) -> &ShapeTimeline {
        &self.timeline
    }
}
