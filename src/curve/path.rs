use glam::DVec2;

use super::bezier::CubicBezier;

/// Upper bound on samples per curve when flattening.
pub const MAX_STEPS_PER_CURVE: usize = 4096;
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// A chain of cubic curves starting at a single vertex.
///
/// Every curve ends where the next one starts, so the vertex list is the
/// start point followed by each curve's end point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SmoothPath {
    start: Option<DVec2>,
    curves: Vec<CubicBezier>,
}

impl SmoothPath {
    pub fn new(start: DVec2) -> Self {
        Self {
            start: Some(start),
            curves: Vec::new(),
        }
    }

    /// Appends a cubic from the current end point to `to`.
    pub fn curve_to(&mut self, control1: DVec2, control2: DVec2, to: DVec2) -> &mut Self {
        let from = self.current_pos();
        if self.start.is_none() {
            self.start = Some(from);
        }
        self.curves.push(CubicBezier::new(from, control1, control2, to));
        self
    }

    pub fn current_pos(&self) -> DVec2 {
        self.curves
            .last()
            .map(|c| c.to)
            .or(self.start)
            .unwrap_or(DVec2::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn curves(&self) -> &[CubicBezier] {
        &self.curves
    }

    pub fn vertices(&self) -> Vec<DVec2> {
        self.start
            .into_iter()
            .chain(self.curves.iter().map(|c| c.to))
            .collect()
    }

    /// Samples the path into a polyline whose consecutive points are at most
    /// `resolution` pixels apart, up to [`MAX_STEPS_PER_CURVE`] samples per
    /// curve. The output is deterministic for a given path and resolution.
    pub fn flatten(&self, resolution: f64) -> Vec<DVec2> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let resolution = if resolution.is_finite() && resolution > 0.0 {
            resolution
        } else {
            DEFAULT_RESOLUTION
        };

        let mut output = vec![start];
        for curve in &self.curves {
            let steps = (curve.speed_bound() / resolution).ceil();
            let steps = if steps.is_finite() {
                (steps as usize).clamp(1, MAX_STEPS_PER_CURVE)
            } else {
                1
            };
            curve.sample_into(steps, &mut output);
        }
        output
    }

    /// Approximate arc length of the flattened path.
    pub fn length(&self, resolution: f64) -> f64 {
        polyline_length(&self.flatten(resolution))
    }

    /// The part of the flattened path covering the first `fraction` of its
    /// arc length. Used by hosts to animate the line drawing in.
    pub fn trim(&self, fraction: f64, resolution: f64) -> Vec<DVec2> {
        let samples = self.flatten(resolution);
        if samples.is_empty() || !(fraction > 0.0) {
            return Vec::new();
        }
        if fraction >= 1.0 {
            return samples;
        }

        let target = polyline_length(&samples) * fraction;
        let mut walked = 0.0;
        let mut output = vec![samples[0]];
        for pair in samples.windows(2) {
            let segment = pair[0].distance(pair[1]);
            if walked + segment >= target {
                if segment > 0.0 {
                    let t = (target - walked) / segment;
                    output.push(pair[0].lerp(pair[1], t));
                }
                return output;
            }
            walked += segment;
            output.push(pair[1]);
        }
        output
    }
}

fn polyline_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}
