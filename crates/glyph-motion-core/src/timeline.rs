//! Canonical shape timeline data model.
//!
//! A [`ShapeTimeline`] is the static, shared description of one glyph kind:
//! per-sub-element pose pairs and timing, plus any static structural
//! elements. Timelines are immutable reference data, shared across all
//! instances of the same glyph via `Rc`; nothing here is mutated at runtime.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation / loading failures for timeline data.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline JSON parse error: {0}")]
    Parse(String),
    #[error("non-finite value in segment '{segment}': {field}")]
    NonFiniteValue { segment: String, field: String },
    #[error("negative {field} in segment '{segment}'")]
    NegativeTiming { segment: String, field: String },
    #[error("{field} out of [0,1] in segment '{segment}'")]
    OutOfRange { segment: String, field: String },
}

/// A named set of visual parameters a sub-element may hold.
///
/// `trace` is the path-traversal fraction (0 = nothing drawn, 1 = fully
/// drawn), used for "path drawing itself" effects; `path_offset` shifts
/// where the traced portion starts.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    #[serde(default)]
    pub translate: [f32; 2],
    #[serde(default = "one")]
    pub scale: f32,
    #[serde(default = "one")]
    pub opacity: f32,
    #[serde(default = "one")]
    pub trace: f32,
    #[serde(default)]
    pub path_offset: f32,
}

fn one() -> f32 {
    1.0
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translate: [0.0, 0.0],
            scale: 1.0,
            opacity: 1.0,
            trace: 1.0,
            path_offset: 0.0,
        }
    }
}

impl Pose {
    /// Identity pose: untransformed, opaque, fully traced.
    pub const DEFAULT: Pose = Pose {
        translate: [0.0, 0.0],
        scale: 1.0,
        opacity: 1.0,
        trace: 1.0,
        path_offset: 0.0,
    };

    pub fn translated(x: f32, y: f32) -> Self {
        Self {
            translate: [x, y],
            ..Self::DEFAULT
        }
    }
}

/// Easing curve handed to the host interpolator. The host owns the actual
/// frame-by-frame evaluation; these are timing parameters, not samplers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseInOut,
    Spring { stiffness: f32, damping: f32 },
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOut
    }
}

/// Timing parameters for one sub-element transition.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// Seconds.
    pub duration: f32,
    /// Seconds before the transition begins. Independent per segment, which
    /// is what produces staggered appearances.
    #[serde(default)]
    pub delay: f32,
    #[serde(default)]
    pub easing: Easing,
}

impl Timing {
    pub fn new(duration: f32, delay: f32, easing: Easing) -> Self {
        Self {
            duration,
            delay,
            easing,
        }
    }

    /// Same duration and easing with the delay removed, as used for the
    /// return to the normal pose.
    pub fn without_delay(self) -> Self {
        Self { delay: 0.0, ..self }
    }
}

/// Glyph geometry. Opaque to the controller: supplied by the glyph data
/// crate, passed through to the host renderer unmodified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Path { d: String },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
}

/// One animated sub-element: its geometry, the pose it holds in each of the
/// two states, and the timing of the normal->animate transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub element: Element,
    pub normal: Pose,
    pub animate: Pose,
    /// Where a (re)started animate transition begins. `None` means it begins
    /// at the normal pose. Lets draw-on effects start from an undrawn pose
    /// regardless of what is currently on screen.
    #[serde(default)]
    pub enter_from: Option<Pose>,
    pub timing: Timing,
}

/// Static, shared, declarative description of one glyph kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeTimeline {
    pub name: String,
    /// Linear pixel dimension applied when a config leaves `size` unset.
    pub default_size: f32,
    /// View box as [min_x, min_y, width, height].
    pub view_box: [f32; 4],
    pub segments: Vec<Segment>,
    /// Structural sub-elements rendered identically regardless of state.
    #[serde(default)]
    pub static_elements: Vec<Element>,
}

impl ShapeTimeline {
    /// Wrap in the sharing container used across instances of a glyph kind.
    pub fn shared(self) -> Rc<ShapeTimeline> {
        Rc::new(self)
    }

    /// Validate basic invariants: finite pose numbers, non-negative timing,
    /// opacity/trace within [0,1].
    pub fn validate_basic(&self) -> Result<(), TimelineError> {
        for seg in &self.segments {
            if seg.timing.duration < 0.0 {
                return Err(TimelineError::NegativeTiming {
                    segment: seg.id.clone(),
                    field: "duration".into(),
                });
            }
            if seg.timing.delay < 0.0 {
                return Err(TimelineError::NegativeTiming {
                    segment: seg.id.clone(),
                    field: "delay".into(),
                });
            }
            for (pose, which) in [(&seg.normal, "normal"), (&seg.animate, "animate")] {
                validate_pose(pose, &seg.id, which)?;
            }
            if let Some(pose) = &seg.enter_from {
                validate_pose(pose, &seg.id, "enter_from")?;
            }
        }
        Ok(())
    }
}

fn validate_pose(pose: &Pose, segment: &str, which: &str) -> Result<(), TimelineError> {
    let finite = pose.translate[0].is_finite()
        && pose.translate[1].is_finite()
        && pose.scale.is_finite()
        && pose.opacity.is_finite()
        && pose.trace.is_finite()
        && pose.path_offset.is_finite();
    if !finite {
        return Err(TimelineError::NonFiniteValue {
            segment: segment.into(),
            field: format!("{which} pose"),
        });
    }
    if !(0.0..=1.0).contains(&pose.opacity) {
        return Err(TimelineError::OutOfRange {
            segment: segment.into(),
            field: format!("{which}.opacity"),
        });
    }
    if !(0.0..=1.0).contains(&pose.trace) {
        return Err(TimelineError::OutOfRange {
            segment: segment.into(),
            field: format!("{which}.trace"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: &str, timing: Timing) -> Segment {
        Segment {
            id: id.into(),
            element: Element::Line {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 1.0,
            },
            normal: Pose::DEFAULT,
            animate: Pose::translated(2.0, -2.0),
            enter_from: None,
            timing,
        }
    }

    fn timeline(segments: Vec<Segment>) -> ShapeTimeline {
        ShapeTimeline {
            name: "test".into(),
            default_size: 28.0,
            view_box: [0.0, 0.0, 24.0, 24.0],
            segments,
            static_elements: vec![],
        }
    }

    #[test]
    fn validate_accepts_well_formed_data() {
        let tl = timeline(vec![segment("a", Timing::new(0.3, 0.1, Easing::Linear))]);
        assert!(tl.validate_basic().is_ok());
    }

    #[test]
    fn validate_rejects_negative_delay() {
        let tl = timeline(vec![segment("a", Timing::new(0.3, -0.1, Easing::Linear))]);
        assert!(matches!(
            tl.validate_basic(),
            Err(TimelineError::NegativeTiming { .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_opacity() {
        let mut seg = segment("a", Timing::new(0.3, 0.0, Easing::Linear));
        seg.animate.opacity = 1.5;
        let tl = timeline(vec![seg]);
        assert!(matches!(
            tl.validate_basic(),
            Err(TimelineError::OutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_negative_duration() {
        let tl = timeline(vec![segment("a", Timing::new(-0.3, 0.0, Easing::Linear))]);
        assert!(matches!(
            tl.validate_basic(),
            Err(TimelineError::NegativeTiming { field, .. }) if field == "duration"
        ));
    }

    #[test]
    fn validate_rejects_non_finite_pose() {
        let mut seg = segment("a", Timing::new(0.3, 0.0, Easing::Linear));
        seg.normal.translate[0] = f32::NAN;
        let tl = timeline(vec![seg]);
        assert!(matches!(
            tl.validate_basic(),
            Err(TimelineError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_trace() {
        let mut seg = segment("a", Timing::new(0.3, 0.0, Easing::Linear));
        seg.enter_from = Some(Pose {
            trace: 1.5,
            ..Pose::DEFAULT
        });
        let tl = timeline(vec![seg]);
        assert!(matches!(
            tl.validate_basic(),
            Err(TimelineError::OutOfRange { field, .. }) if field == "enter_from.trace"
        ));
    }
}
