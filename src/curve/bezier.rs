//! Cubic Bezier primitive in pixel space.

use glam::DVec2;

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: DVec2,
    /// First control point
    pub control1: DVec2,
    /// Second control point
    pub control2: DVec2,
    /// End point
    pub to: DVec2,
}

impl CubicBezier {
    pub fn new(from: DVec2, control1: DVec2, control2: DVec2, to: DVec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// First derivative at parameter t.
    pub fn derivative(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        (self.control1 - self.from) * (3.0 * mt2)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.to - self.control2) * (3.0 * t2)
    }

    /// Second derivative at parameter t.
    pub fn second_derivative(&self, t: f64) -> DVec2 {
        let mt = 1.0 - t;
        (self.control2 - self.control1 * 2.0 + self.from) * (6.0 * mt)
            + (self.to - self.control2 * 2.0 + self.control1) * (6.0 * t)
    }

    /// Upper bound of `|derivative(t)|` over `[0, 1]`: three times the
    /// longest leg of the control polygon.
    pub fn speed_bound(&self) -> f64 {
        let legs = [
            self.from.distance(self.control1),
            self.control1.distance(self.control2),
            self.control2.distance(self.to),
        ];
        3.0 * legs.into_iter().fold(0.0, f64::max)
    }

    /// Appends `steps` evenly spaced samples for t in (0, 1] to `output`.
    /// The start point is not emitted; the last sample is exactly `to`.
    pub fn sample_into(&self, steps: usize, output: &mut Vec<DVec2>) {
        let steps = steps.max(1);
        for i in 1..steps {
            output.push(self.eval(i as f64 / steps as f64));
        }
        output.push(self.to);
    }
}
