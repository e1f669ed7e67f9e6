use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Screen or domain axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Distance metric selected by a set of axes for nearest-point queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisMetric {
    /// No axis selected: queries return the input unchanged.
    Identity,
    Horizontal,
    Vertical,
    Euclidean,
}

impl AxisMetric {
    pub fn from_axes(axes: &[Axis]) -> Self {
        let horizontal = axes.contains(&Axis::Horizontal);
        let vertical = axes.contains(&Axis::Vertical);
        match (horizontal, vertical) {
            (false, false) => Self::Identity,
            (true, false) => Self::Horizontal,
            (false, true) => Self::Vertical,
            (true, true) => Self::Euclidean,
        }
    }

    /// Comparable distance between two points. Euclidean distances are
    /// squared, which preserves ordering.
    pub fn distance(self, a: DVec2, b: DVec2) -> f64 {
        match self {
            Self::Identity => 0.0,
            Self::Horizontal => (a.x - b.x).abs(),
            Self::Vertical => (a.y - b.y).abs(),
            Self::Euclidean => a.distance_squared(b),
        }
    }

    /// Index of the first point closest to `query`, or `None` for an empty
    /// iterator or the identity metric.
    pub fn closest_index<I>(self, query: DVec2, points: I) -> Option<usize>
    where
        I: IntoIterator<Item = DVec2>,
    {
        if self == Self::Identity {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in points.into_iter().enumerate() {
            let d = self.distance(query, p);
            match best {
                Some((_, best_d)) if !(d < best_d) => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Per-axis minimum and maximum of a point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extents {
    /// Folds the positions into their bounding extents.
    ///
    /// An empty input yields the zero-width extent at the origin, so callers
    /// must check for emptiness before dividing by the ranges.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec2>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        iter.fold(
            Self {
                x_min: first.x,
                x_max: first.x,
                y_min: first.y,
                y_max: first.y,
            },
            |acc, p| Self {
                x_min: acc.x_min.min(p.x),
                x_max: acc.x_max.max(p.x),
                y_min: acc.y_min.min(p.y),
                y_max: acc.y_max.max(p.y),
            },
        )
    }

    pub fn ranges(&self) -> Ranges {
        Ranges {
            x: self.x_max - self.x_min,
            y: self.y_max - self.y_min,
        }
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x_min && point.x <= self.x_max && point.y >= self.y_min && point.y <= self.y_max
    }
}

/// Span of each axis (`max - min`). Either component may be zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranges {
    pub x: f64,
    pub y: f64,
}
