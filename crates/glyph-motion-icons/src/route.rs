//! Route glyph: start dot, curved path, and end dot drawing themselves in
//! sequence. Each segment restarts from an undrawn pose, so re-triggering
//! replays the whole draw-on.

use std::rc::Rc;

use glyph_motion_core::{
    Easing, Element, IconConfig, IconInstance, Pose, Segment, ShapeTimeline, Timing,
};

use crate::{DEFAULT_SIZE, VIEW_BOX};

const CURVE_D: &str = "M6 18 C8 14, 16 10, 18 6";

fn undrawn() -> Pose {
    Pose {
        trace: 0.0,
        opacity: 0.0,
        ..Pose::DEFAULT
    }
}

/// Shared timeline for this glyph kind: built once per thread, every
/// instance holds a clone of the same `Rc`.
pub fn timeline() -> Rc<ShapeTimeline> {
    thread_local! {
        static TIMELINE: Rc<ShapeTimeline> = build();
    }
    TIMELINE.with(Rc::clone)
}

fn build() -> Rc<ShapeTimeline> {
    let dot = |id: &str, cx: f32, cy: f32, delay: f32| Segment {
        id: id.into(),
        element: Element::Circle { cx, cy, r: 2.0 },
        normal: Pose::DEFAULT,
        animate: Pose::DEFAULT,
        enter_from: Some(undrawn()),
        timing: Timing::new(0.3, delay, Easing::EaseInOut),
    };

    ShapeTimeline {
        name: "route".into(),
        default_size: DEFAULT_SIZE,
        view_box: VIEW_BOX,
        segments: vec![
            dot("start", 6.0, 18.0, 0.1),
            Segment {
                id: "curve".into(),
                element: Element::Path { d: CURVE_D.into() },
                normal: Pose::DEFAULT,
                animate: Pose::DEFAULT,
                // The curve draws from its far end: traced portion slides in.
                enter_from: Some(Pose {
                    path_offset: 1.0,
                    ..undrawn()
                }),
                timing: Timing::new(0.6, 0.3, Easing::EaseInOut),
            },
            dot("end", 18.0, 6.0, 0.6),
        ],
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
    fn draw_on_sequence_is_ordered() {
        let tl = timeline();
        tl.validate_basic().expect("valid");

        let visual = project(AnimationState::Animating, &tl);
        let delays: Vec<f32> = visual.elements.iter().map(|e| e.timing.delay).collect();
        assert_eq!(delays, vec![0.1, 0.3, 0.6]);

        // Every segment begins undrawn and ends fully traced.
        for el in &visual.elements {
            let from = el.enter_from.expect("undrawn start");
            assert_eq!(from.trace, 0.0);
            assert_eq!(from.opacity, 0.0);
            assert_eq!(el.pose.trace, 1.0);
            assert_eq!(el.pose.opacity, 1.0);
        }

        // Back to normal: fully drawn, no delays, retarget from current.
        let normal = project(AnimationState::Normal, &tl);
        for el in &normal.elements {
            assert_eq!(el.pose.trace, 1.0);
            assert_eq!(el.timing.delay, 0.0);
            assert!(el.enter_from.is_none());
        }
    }
}
