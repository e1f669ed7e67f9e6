//! Nearest-point lookup over the rendered curve.
//!
//! The crosshair snaps onto the drawn line rather than onto data vertices,
//! so the table indexes a dense sampling of the path. It is rebuilt
//! wholesale whenever the path changes.

use std::sync::Arc;

use glam::DVec2;
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;

use crate::curve::path::DEFAULT_RESOLUTION;
use crate::curve::SmoothPath;
use crate::data_types::{Axis, AxisMetric};

#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable {
    resolution: f64,
    /// Path samples in path order.
    samples: Vec<DVec2>,
    /// Indices into `samples`, stably sorted by x.
    by_x: Vec<usize>,
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl LookupTable {
    /// Empty table sampling paths every `resolution` pixels.
    pub fn new(resolution: f64) -> Self {
        Self {
            resolution,
            samples: Vec::new(),
            by_x: Vec::new(),
        }
    }

    pub fn from_path(path: &SmoothPath, resolution: f64) -> Self {
        let mut table = Self::new(resolution);
        table.update(path);
        table
    }

    /// Rebuilds the table from scratch.
    pub fn update(&mut self, path: &SmoothPath) {
        self.samples = path.flatten(self.resolution);
        let mut by_x: Vec<usize> = (0..self.samples.len()).collect();
        by_x.sort_by(|&a, &b| self.samples[a].x.total_cmp(&self.samples[b].x));
        self.by_x = by_x;
        debug!(
            samples = self.samples.len(),
            resolution = self.resolution,
            "rebuilt lookup table"
        );
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn samples(&self) -> &[DVec2] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Point on the curve closest to `query` under the metric chosen by `axes`.
    ///
    /// An empty table returns the origin; no axes returns `query` itself.
    /// Ties resolve to the earliest sample along the path.
    pub fn closest(&self, query: DVec2, axes: &[Axis]) -> DVec2 {
        if self.samples.is_empty() {
            return DVec2::ZERO;
        }
        let metric = AxisMetric::from_axes(axes);
        let index = match metric {
            AxisMetric::Identity => return query,
            AxisMetric::Horizontal if query.x.is_finite() => Some(self.closest_horizontal(query.x)),
            _ => metric.closest_index(query, self.samples.iter().copied()),
        };
        index.map_or(query, |i| self.samples[i])
    }

    // Binary search over the x-sorted index. Equal x values form contiguous
    // runs whose first entry has the lowest path index, which reproduces the
    // first-minimum result of a linear scan.
    fn closest_horizontal(&self, x: f64) -> usize {
        let sample_x = |k: usize| self.samples[self.by_x[k]].x;
        let split = self.by_x.partition_point(|&i| self.samples[i].x < x);

        let left = (split > 0).then(|| {
            let left_x = sample_x(split - 1);
            let run_start = self.by_x.partition_point(|&i| self.samples[i].x < left_x);
            (self.by_x[run_start], x - left_x)
        });
        let right = (split < self.by_x.len()).then(|| (self.by_x[split], sample_x(split) - x));

        match (left, right) {
            (Some((l, dl)), Some((r, dr))) => {
                if dl < dr {
                    l
                } else if dr < dl {
                    r
                } else {
                    l.min(r)
                }
            }
            (Some((l, _)), None) => l,
            (None, Some((r, _))) => r,
            (None, None) => 0,
        }
    }
}

/// Lookup table shared between a writer (layout) and readers (gesture
/// handling), possibly on different threads.
///
/// Rebuilds construct the new table before taking the write lock, so
/// readers only ever see a complete table.
#[derive(Clone, Debug, Default)]
pub struct SharedLookupTable {
    inner: Arc<RwLock<LookupTable>>,
}

impl SharedLookupTable {
    pub fn new(resolution: f64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LookupTable::new(resolution))),
        }
    }

    pub fn rebuild(&self, path: &SmoothPath) {
        let resolution = self.inner.read().resolution();
        let fresh = LookupTable::from_path(path, resolution);
        *self.inner.write() = fresh;
    }

    pub fn closest(&self, query: DVec2, axes: &[Axis]) -> DVec2 {
        self.inner.read().closest(query, axes)
    }

    pub fn read(&self) -> RwLockReadGuard<'_, LookupTable> {
        self.inner.read()
    }
}
