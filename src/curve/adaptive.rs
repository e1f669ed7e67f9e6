use glam::DVec2;

use super::BezierSegment;

/// Local control points: each end of a segment is pulled horizontally
/// towards the other by `step * width` pixels, keeping the vertex's y.
///
/// The offset never depends on the neighbours' y values, so large swings
/// cannot push the curve far outside the pair's bounding box.
pub fn adaptive_segments(points: &[DVec2], step: f64, width: f64) -> Vec<BezierSegment> {
    let offset = DVec2::new(step * width, 0.0);
    points
        .windows(2)
        .map(|pair| BezierSegment::new(pair[0] + offset, pair[1] - offset))
        .collect()
}
