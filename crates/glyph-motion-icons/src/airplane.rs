//! Airplane glyph: the plane darts up-right with a spring while three speed
//! lines fade in behind it, staggered 0.1 s apart. A static runway sits
//! underneath.

use std::rc::Rc;

use glyph_motion_core::{
    Easing, Element, IconConfig, IconInstance, Pose, Segment, ShapeTimeline, Timing,
};

use crate::{DEFAULT_SIZE, VIEW_BOX};

const PLANE_D: &str = "M21.949 10.1118C22.1634 10.912 21.6886 11.7345 20.8884 11.9489L5.2218 \
                       16.1467C4.77856 16.2655 4.31138 16.0674 4.08866 15.6662L1.46582 \
                       10.9415L2.91471 10.5533L5.3825 12.9979L10.4778 11.6326L5.96728 \
                       4.55896L7.89913 4.04132L14.8505 10.4609L20.1119 9.05113C20.9121 8.83671 \
                       21.7346 9.31159 21.949 10.1118Z";
const RUNWAY_D: &str = "M4 19H20V21H4V19Z";

const SPEED_LINES: [(f32, f32, f32, f32, f32); 3] = [
    // x1, y1, x2, y2, delay
    (6.0, 16.0, 2.0, 20.0, 0.1),
    (8.0, 18.0, 4.0, 22.0, 0.2),
    (10.0, 20.0, 6.0, 24.0, 0.3),
];

/// Shared timeline for this glyph kind: built once per thread, every
/// instance holds a clone of the same `Rc`.
pub fn timeline() -> Rc<ShapeTimeline> {
    thread_local! {
        static TIMELINE: Rc<ShapeTimeline> = build();
    }
    TIMELINE.with(Rc::clone)
}

fn build() -> Rc<ShapeTimeline> {
    let mut segments = vec![Segment {
        id: "plane".into(),
        element: Element::Path { d: PLANE_D.into() },
        normal: Pose::DEFAULT,
        animate: Pose {
            translate: [3.0, -3.0],
            scale: 0.9,
            ..Pose::DEFAULT
        },
        enter_from: None,
        timing: Timing::new(
            0.5,
            0.0,
            Easing::Spring {
                stiffness: 200.0,
                damping: 10.0,
            },
        ),
    }];

    for (i, (x1, y1, x2, y2, delay)) in SPEED_LINES.into_iter().enumerate() {
        segments.push(Segment {
            id: format!("speed-line-{i}"),
            element: Element::Line { x1, y1, x2, y2 },
            normal: Pose {
                opacity: 0.0,
                translate: [-3.0, 3.0],
                ..Pose::DEFAULT
            },
            animate: Pose::DEFAULT,
            enter_from: None,
            timing: Timing::new(
                0.15,
                delay,
                Easing::Spring {
                    stiffness: 200.0,
                    damping: 12.0,
                },
            ),
        });
    }

    ShapeTimeline {
        name: "airplane".into(),
        default_size: DEFAULT_SIZE,
        view_box: VIEW_BOX,
        segments,
        static_elements: vec![Element::Path { d: RUNWAY_D.into() }],
    }
    .shared()
}

pub fn instance(config: IconConfig) -> IconInstance {
    IconInstance::new(timeline(), config)
}
