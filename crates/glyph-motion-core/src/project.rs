//! Render projector: maps (state, timeline) to a concrete visual
//! description.
//!
//! Pure function of its inputs. For each segment it selects the target pose
//! and timing for the requested state; it never consults partial prior
//! progress, so a transition requested mid-flight simply retargets (the host
//! interpolator's standard behavior for retargeted animations produces the
//! smooth interruption). No timers are managed here.

use serde::{Deserialize, Serialize};

use crate::state::AnimationState;
use crate::timeline::{Element, Pose, ShapeTimeline, Timing};

/// One sub-element annotated with the pose and timing to interpolate toward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedElement {
    pub id: String,
    pub element: Element,
    /// Target pose for the requested state.
    pub pose: Pose,
    /// For `Animating`, the pose a (re)started transition begins at: the
    /// segment's `enter_from` when defined, else its normal pose. `None`
    /// for `Normal`, where the host retargets smoothly from wherever the
    /// element currently is rather than snapping.
    pub enter_from: Option<Pose>,
    /// Timing parameters for reaching it. For `Normal` the segment's delay
    /// is dropped so every sub-element returns immediately; for `Animating`
    /// per-segment delays are preserved, producing the stagger.
    pub timing: Timing,
}

/// Full visual description for one redraw pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualDescription {
    pub state: AnimationState,
    pub view_box: [f32; 4],
    pub elements: Vec<RenderedElement>,
    /// Rendered identically regardless of state.
    pub static_elements: Vec<Element>,
}

/// Project the requested state over a timeline.
pub fn project(state: AnimationState, timeline: &ShapeTimeline) -> VisualDescription {
    let elements = timeline
        .segments
        .iter()
        .map(|seg| {
            let (pose, enter_from, timing) = match state {
                AnimationState::Animating => (
                    seg.animate,
                    Some(seg.enter_from.unwrap_or(seg.normal)),
                    seg.timing,
                ),
                AnimationState::Normal => (seg.normal, None, seg.timing.without_delay()),
            };
            RenderedElement {
                id: seg.id.clone(),
                element: seg.element.clone(),
                pose,
                enter_from,
                timing,
            }
        })
        .collect();

    VisualDescription {
        state,
        view_box: timeline.view_box,
        elements,
        static_elements: timeline.static_elements.clone(),
    }
}
