//! Expand glyph: two corner arrows springing diagonally apart.

use std::rc::Rc;

use glyph_motion_core::{
    Easing, Element, IconConfig, IconInstance, Pose, Segment, ShapeTimeline, Timing,
};

use crate::{DEFAULT_SIZE, VIEW_BOX};

const TOP_RIGHT_D: &str =
    "M17.5858 5H14V3H21V10H19V6.41421L14.7071 10.7071L13.2929 9.29289L17.5858 5Z";
const BOTTOM_LEFT_D: &str =
    "M3 14H5V17.5858L9.29289 13.2929L10.7071 14.7071L6.41421 19H10V21H3V14Z";

const SPRING: Easing = Easing::Spring {
    stiffness: 250.0,
    damping: 25.0,
};

/// Shared timeline for this glyph kind: built once per thread, every
/// instance holds a clone of the same `Rc`.
pub fn timeline() -> Rc<ShapeTimeline> {
    thread_local! {
        static TIMELINE: Rc<ShapeTimeline> = build();
    }
    TIMELINE.with(Rc::clone)
}

fn build() -> Rc<ShapeTimeline> {
    let arrow = |id: &str, d: &str, dx: f32, dy: f32| Segment {
        id: id.into(),
        element: Element::Path { d: d.into() },
        normal: Pose::DEFAULT,
        animate: Pose::translated(dx, dy),
        enter_from: None,
        timing: Timing::new(0.3, 0.0, SPRING),
    };

    ShapeTimeline {
        name: "expand".into(),
        default_size: DEFAULT_SIZE,
        view_box: VIEW_BOX,
        segments: vec![
            arrow("top-right", TOP_RIGHT_D, 2.0, -2.0),
            arrow("bottom-left", BOTTOM_LEFT_D, -2.0, 2.0),
        ],
        static_elements: vec![],
    }
    .shared()
}

pub fn instance(config: IconConfig) -> IconInstance {
    IconInstance::new(timeline(), config)
}
