//! Smooth curve construction through mapped data points.
//!
//! Control points are computed over the mapped points augmented with two
//! synthetic outliers, placed [`OUTLIER_OFFSET`] pixels before the first and
//! after the last point. They stabilise the tangents at both ends and are
//! never drawn: the path's vertices are exactly the real points.

pub mod adaptive;
pub mod bezier;
pub mod natural;
pub mod path;

pub use adaptive::adaptive_segments;
pub use bezier::CubicBezier;
pub use natural::natural_segments;
pub use path::SmoothPath;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Horizontal distance of the synthetic end points, in pixels.
pub const OUTLIER_OFFSET: f64 = 5.0;
pub const DEFAULT_ADAPTIVE_STEP: f64 = 0.1;
pub const BOUNDED_ADAPTIVE_STEP: f64 = 0.03;

/// Control-point placement strategy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CurveMode {
    /// Fixed horizontal offset of `step * width` from each vertex.
    Adaptive { step: f64 },
    /// Globally solved natural cubic spline.
    Natural,
}

impl CurveMode {
    /// Adaptive mode with the tighter step.
    pub fn bounded() -> Self {
        Self::Adaptive {
            step: BOUNDED_ADAPTIVE_STEP,
        }
    }
}

impl Default for CurveMode {
    fn default() -> Self {
        Self::Adaptive {
            step: DEFAULT_ADAPTIVE_STEP,
        }
    }
}

/// Control points of the cubic between two consecutive points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSegment {
    pub control1: DVec2,
    pub control2: DVec2,
}

impl BezierSegment {
    pub fn new(control1: DVec2, control2: DVec2) -> Self {
        Self { control1, control2 }
    }
}

/// `points` with the two outliers added at both ends.
pub fn augment(points: &[DVec2]) -> Vec<DVec2> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let mut augmented = Vec::with_capacity(points.len() + 2);
    augmented.push(first - DVec2::new(OUTLIER_OFFSET, 0.0));
    augmented.extend_from_slice(points);
    augmented.push(last + DVec2::new(OUTLIER_OFFSET, 0.0));
    augmented
}

/// One segment per adjacent pair of the augmented list, so `n + 1`
/// segments for `n` points. Fewer than two points yield none.
///
/// Segment `k` (for `k` in `1..n`) joins real points `k - 1` and `k`.
pub fn segments(points: &[DVec2], mode: CurveMode, width: f64) -> Vec<BezierSegment> {
    if points.len() < 2 {
        return Vec::new();
    }
    let augmented = augment(points);
    match mode {
        CurveMode::Adaptive { step } => adaptive_segments(&augmented, step, width),
        CurveMode::Natural => natural_segments(&augmented),
    }
}

/// Smooth path through `points` (already in screen space).
///
/// A non-positive or non-finite `width` yields an empty path.
pub fn build_path(points: &[DVec2], mode: CurveMode, width: f64) -> SmoothPath {
    if !(width.is_finite() && width > 0.0) {
        return SmoothPath::default();
    }
    let segments = segments(points, mode, width);
    if segments.is_empty() {
        return SmoothPath::default();
    }
    let mut path = SmoothPath::new(points[0]);
    for (k, &point) in points.iter().enumerate().skip(1) {
        let segment = segments[k];
        path.curve_to(segment.control1, segment.control2, point);
    }
    path
}
