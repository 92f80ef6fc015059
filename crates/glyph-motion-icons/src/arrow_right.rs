//! Arrow-right glyph: a single arrow that recoils left and eases back,
//! modeled as a restart at the recoil pose easing back to identity.

use std::rc::Rc;

use glyph_motion_core::{
    Easing, Element, IconConfig, IconInstance, Pose, Segment, ShapeTimeline, Timing,
};

use crate::{DEFAULT_SIZE, VIEW_BOX};

const ARROW_D: &str = "M16.1716 10.9999L10.8076 5.63589L12.2218 4.22168L20 11.9999L12.2218 \
                       19.778L10.8076 18.3638L16.1716 12.9999H4V10.9999H16.1716Z";

/// Shared timeline for this glyph kind: built once per thread, every
/// instance holds a clone of the same `Rc`.
pub fn timeline() -> Rc<ShapeTimeline> {
    thread_local! {
        static TIMELINE: Rc<ShapeTimeline> = build();
    }
    TIMELINE.with(Rc::clone)
}

fn build() -> Rc<ShapeTimeline> {
    ShapeTimeline {
        name: "arrow-right".into(),
        default_size: DEFAULT_SIZE,
        view_box: VIEW_BOX,
        segments: vec![Segment {
            id: "arrow".into(),
            element: Element::Path { d: ARROW_D.into() },
            normal: Pose::DEFAULT,
            animate: Pose::DEFAULT,
            enter_from: Some(Pose {
                translate: [-3.0, 0.0],
                scale: 0.9,
                ..Pose::DEFAULT
            }),
            timing: Timing::new(0.4, 0.0, Easing::EaseInOut),
        }],
        static_elements: vec![],
    }
    .shared()
}

pub fn instance(config: IconConfig) -> IconInstance {
    IconInstance::new(timeline(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_motion_core::{project, AnimationState};

    #[test]
    fn restart_begins_at_recoil_pose() {
        let tl = timeline();
        tl.validate_basic().expect("valid");

        let visual = project(AnimationState::Animating, &tl);
        let el = &visual.elements[0];
        assert_eq!(el.pose, Pose::DEFAULT);
        let from = el.enter_from.expect("defined initial pose");
        assert_eq!(from.translate, [-3.0, 0.0]);
        assert_eq!(from.scale, 0.9);
    }
}
