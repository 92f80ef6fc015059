use glyph_motion_core::{
    project, AnimationState, Easing, Element, IconConfig, IconInstance, PointerEvent, Pose,
    Segment, ShapeTimeline, Timing,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn staggered_timeline() -> ShapeTimeline {
    let line = |id: &str, delay: f32| Segment {
        id: id.into(),
        element: Element::Line {
            x1: 8.0,
            y1: 18.0,
            x2: 4.0,
            y2: 22.0,
        },
        normal: Pose {
            opacity: 0.0,
            translate: [-3.0, 3.0],
            ..Pose::DEFAULT
        },
        animate: Pose::DEFAULT,
        enter_from: None,
        timing: Timing::new(0.15, delay, Easing::EaseInOut),
    };
    ShapeTimeline {
        name: "staggered".into(),
        default_size: 28.0,
        view_box: [0.0, 0.0, 24.0, 24.0],
        segments: vec![line("l0", 0.1), line("l1", 0.2), line("l2", 0.3)],
        static_elements: vec![Element::Path {
            d: "M4 19H20V21H4V19Z".into(),
        }],
    }
}

/// it should stagger three sub-elements by their own delays when animating (scenario D)
#[test]
fn animating_uses_animate_pose_and_delays() {
    let tl = staggered_timeline();
    let visual = project(AnimationState::Animating, &tl);

    assert_eq!(visual.state, AnimationState::Animating);
    assert_eq!(visual.elements.len(), 3);
    let delays: Vec<f32> = visual.elements.iter().map(|e| e.timing.delay).collect();
    assert_eq!(delays, vec![0.1, 0.2, 0.3]);
    for el in &visual.elements {
        assert_eq!(el.pose, Pose::DEFAULT);
        approx(el.timing.duration, 0.15, 1e-6);
        assert_eq!(el.timing.easing, Easing::EaseInOut);
    }
}

/// it should use the normal pose with zero delay for all sub-elements
#[test]
fn normal_uses_normal_pose_without_delay() {
    let tl = staggered_timeline();
    let visual = project(AnimationState::Normal, &tl);

    assert_eq!(visual.elements.len(), 3);
    for el in &visual.elements {
        approx(el.pose.opacity, 0.0, 1e-6);
        approx(el.pose.translate[0], -3.0, 1e-6);
        approx(el.timing.delay, 0.0, 1e-6);
        // Duration and easing are kept so the return leg interpolates too.
        approx(el.timing.duration, 0.15, 1e-6);
    }
}

/// it should pass static elements through identically in both states
#[test]
fn static_elements_state_independent() {
    let tl = staggered_timeline();
    let normal = project(AnimationState::Normal, &tl);
    let animating = project(AnimationState::Animating, &tl);
    assert_eq!(normal.static_elements, animating.static_elements);
    assert_eq!(normal.static_elements.len(), 1);
}

/// it should start animate transitions at enter_from, defaulting to normal
#[test]
fn enter_from_defaults_to_normal_pose() {
    let mut tl = staggered_timeline();
    let undrawn = Pose {
        trace: 0.0,
        opacity: 0.0,
        ..Pose::DEFAULT
    };
    tl.segments[0].enter_from = Some(undrawn);

    let animating = project(AnimationState::Animating, &tl);
    assert_eq!(animating.elements[0].enter_from, Some(undrawn));
    // Without an explicit enter_from the transition begins at normal.
    assert_eq!(animating.elements[1].enter_from, Some(tl.segments[1].normal));

    // Returning to normal always retargets from the current pose.
    let normal = project(AnimationState::Normal, &tl);
    assert!(normal.elements.iter().all(|e| e.enter_from.is_none()));
}

/// it should be a pure function: same inputs, same description
#[test]
fn projection_is_pure() {
    let tl = staggered_timeline();
    let a = project(AnimationState::Animating, &tl);
    let b = project(AnimationState::Animating, &tl);
    assert_eq!(a, b);
}

/// it should advance the frame epoch on every transition so hosts can restart
#[test]
fn render_epoch_signals_restart() {
    let mut icon = IconInstance::new(staggered_timeline().shared(), IconConfig::new());
    let e0 = icon.render().epoch;

    icon.pointer_enter(PointerEvent::enter([0.0, 0.0], 0.0));
    let e1 = icon.render().epoch;
    assert_eq!(e1, e0 + 1);

    // Same-state restart through the handle still advances.
    let handle = icon.handle();
    handle.start_animation();
    handle.start_animation();
    let e3 = icon.render().epoch;
    assert_eq!(e3, e1 + 2);
    assert_eq!(icon.render().visual.state, AnimationState::Animating);
}
