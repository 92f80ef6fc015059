//! Parse stored timeline JSON into the canonical [`ShapeTimeline`].
//!
//! Notes:
//! - Durations and delays are seconds in the JSON and kept as seconds.
//! - Omitted pose fields take the identity defaults (untransformed, opaque,
//!   fully traced); an omitted easing defaults to ease-in-out.
//! - Basic invariants are validated on load.

use serde::Deserialize;

use crate::timeline::{
    Easing, Element, Pose, Segment, ShapeTimeline, TimelineError, Timing,
};

/// Parse a stored timeline document and validate it.
pub fn parse_timeline_json(s: &str) -> Result<ShapeTimeline, TimelineError> {
    let raw: RawTimeline =
        serde_json::from_str(s).map_err(|e| TimelineError::Parse(e.to_string()))?;

    let segments = raw
        .segments
        .into_iter()
        .map(|seg| Segment {
            id: seg.id,
            element: to_element(seg.element),
            normal: seg.normal.unwrap_or_default(),
            animate: seg.animate.unwrap_or_default(),
            enter_from: seg.enter_from,
            timing: Timing {
                duration: seg.duration,
                delay: seg.delay.unwrap_or(0.0),
                easing: to_easing(seg.easing),
            },
        })
        .collect();

    let timeline = ShapeTimeline {
        name: raw.name,
        default_size: raw.default_size.unwrap_or(28.0),
        view_box: raw.view_box.unwrap_or([0.0, 0.0, 24.0, 24.0]),
        segments,
        static_elements: raw
            .static_elements
            .into_iter()
            .map(to_element)
            .collect(),
    };
    timeline.validate_basic()?;
    Ok(timeline)
}

fn to_element(e: RawElement) -> Element {
    match e {
        RawElement::Path { d } => Element::Path { d },
        RawElement::Line { x1, y1, x2, y2 } => Element::Line { x1, y1, x2, y2 },
        RawElement::Circle { cx, cy, r } => Element::Circle { cx, cy, r },
    }
}

fn to_easing(e: Option<RawEasing>) -> Easing {
    match e {
        None => Easing::default(),
        Some(RawEasing::Named(name)) => match name.as_str() {
            "linear" => Easing::Linear,
            // Unknown names degrade to the default curve rather than failing.
            _ => Easing::EaseInOut,
        },
        Some(RawEasing::Spring { stiffness, damping }) => Easing::Spring { stiffness, damping },
        Some(RawEasing::CubicBezier { x1, y1, x2, y2 }) => Easing::CubicBezier { x1, y1, x2, y2 },
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawTimeline {
    pub name: String,
    #[serde(default)]
    #[serde(rename = "defaultSize")]
    pub default_size: Option<f32>,
    #[serde(default)]
    #[serde(rename = "viewBox")]
    pub view_box: Option<[f32; 4]>,
    pub segments: Vec<RawSegment>,
    #[serde(default)]
    #[serde(rename = "staticElements")]
    pub static_elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawSegment {
    pub id: String,
    pub element: RawElement,
    #[serde(default)]
    pub normal: Option<Pose>,
    #[serde(default)]
    pub animate: Option<Pose>,
    #[serde(default)]
    #[serde(rename = "enterFrom")]
    pub enter_from: Option<Pose>,
    pub duration: f32,
    #[serde(default)]
    pub delay: Option<f32>,
    #[serde(default)]
    pub easing: Option<RawEasing>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawElement {
    // More specific shapes before less specific to avoid untagged pitfalls.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    Path { d: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEasing {
    Spring { stiffness: f32, damping: f32 },
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    Named(String),
}
