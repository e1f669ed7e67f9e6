use glam::DVec2;

use super::axis::{Axis, AxisMetric, Extents, Ranges};
use super::plottable::Plottable;
use crate::ticks;
use crate::transform::{PlotTransform, Viewport};

/// Immutable, x-sorted collection of plottable points.
///
/// Extents and ranges are computed once at construction.
#[derive(Clone, Debug)]
pub struct PointSet<P> {
    points: Vec<P>,
    extents: Extents,
    ranges: Ranges,
}

impl<P: Plottable> PointSet<P> {
    /// Sorts the points by x ascending (stable, NaN last) and caches their extents.
    pub fn new(mut points: Vec<P>) -> Self {
        points.sort_by(|a, b| a.position().x.total_cmp(&b.position().x));
        let extents = Extents::from_points(points.iter().map(Plottable::position));
        Self {
            points,
            extents,
            ranges: extents.ranges(),
        }
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(Plottable::position)
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    pub fn ranges(&self) -> Ranges {
        self.ranges
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Domain <-> screen mapping for this set at the given viewport size.
    pub fn transform(&self, viewport: Viewport) -> PlotTransform {
        PlotTransform::new(self.extents, self.points.len(), viewport)
    }

    /// Screen position of every point, in x order.
    pub fn to_screen(&self, viewport: Viewport) -> Vec<DVec2> {
        let transform = self.transform(viewport);
        let mut output = Vec::with_capacity(self.points.len());
        transform.batch_data_to_screen(self.positions(), &mut output);
        output
    }

    /// Position of the data point closest to `query` under the metric chosen by `axes`.
    ///
    /// No axes returns `query` itself; an empty set returns the origin.
    /// Ties keep the earliest point in x order.
    pub fn closest_point(&self, query: DVec2, axes: &[Axis]) -> DVec2 {
        if self.points.is_empty() {
            return DVec2::ZERO;
        }
        let metric = AxisMetric::from_axes(axes);
        match metric.closest_index(query, self.positions()) {
            Some(i) => self.points[i].position(),
            None => query,
        }
    }

    /// Labels for the vertical axis, from `y_max` down to `y_min`.
    pub fn vertical_ticks(&self, count: usize) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        ticks::vertical_ticks::<P>(&self.extents, count)
    }

    /// Labels for the horizontal axis, from `x_min` up to `x_max`.
    pub fn horizontal_ticks(&self, count: usize) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        ticks::horizontal_ticks::<P>(&self.extents, count)
    }
}

impl<P: Plottable> FromIterator<P> for PointSet<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
