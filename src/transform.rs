//! Affine mapping between domain values and viewport pixels.

use crate::data_types::{Extents, Ranges};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Size of the drawing area in pixels, supplied by the host per render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= 0.0 && x <= self.width
    }
}

/// Affine mapping between domain space and viewport pixel space.
///
/// Screen y grows downward while domain y grows upward, so the mapping is
/// vertically mirrored unless [`PlotTransform::mirrored`] turns it off.
/// With fewer than two points or an invalid viewport every mapping returns
/// the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    pub extents: Extents,
    pub ranges: Ranges,
    pub viewport: Viewport,
    pub mirrored: bool,
    degenerate: bool,
}

impl PlotTransform {
    pub fn new(extents: Extents, point_count: usize, viewport: Viewport) -> Self {
        Self {
            extents,
            ranges: extents.ranges(),
            viewport,
            mirrored: true,
            degenerate: point_count < 2 || !viewport.is_valid(),
        }
    }

    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn data_to_screen(&self, point: DVec2) -> DVec2 {
        if self.degenerate {
            return DVec2::ZERO;
        }
        DVec2::new(self.x_data_to_screen(point.x), self.y_data_to_screen(point.y))
    }

    /// Inverse of [`PlotTransform::data_to_screen`]. The mirror correction is
    /// undone before the reverse scale.
    pub fn screen_to_data(&self, point: DVec2) -> DVec2 {
        if self.degenerate {
            return DVec2::ZERO;
        }
        let mut y = point.y;
        if self.mirrored {
            y = self.viewport.height - y;
        }
        DVec2::new(
            invert(point.x, self.extents.x_min, self.ranges.x, self.viewport.width),
            invert(y, self.extents.y_min, self.ranges.y, self.viewport.height),
        )
    }

    pub fn x_data_to_screen(&self, x: f64) -> f64 {
        if self.degenerate {
            return 0.0;
        }
        scale(x, self.extents.x_min, self.ranges.x, self.viewport.width)
    }

    pub fn y_data_to_screen(&self, y: f64) -> f64 {
        if self.degenerate {
            return 0.0;
        }
        let screen = scale(y, self.extents.y_min, self.ranges.y, self.viewport.height);
        if self.mirrored {
            self.viewport.height - screen
        } else {
            screen
        }
    }

    /// Maps a batch of domain points into `output`, reusing its allocation.
    pub fn batch_data_to_screen<I>(&self, points: I, output: &mut Vec<DVec2>)
    where
        I: IntoIterator<Item = DVec2>,
    {
        output.clear();
        output.extend(points.into_iter().map(|p| self.data_to_screen(p)));
    }
}

// A zero range collapses the axis onto the middle of the viewport.
fn scale(value: f64, min: f64, range: f64, length: f64) -> f64 {
    if range == 0.0 {
        return length / 2.0;
    }
    (value - min) / range * length
}

fn invert(pixel: f64, min: f64, range: f64, length: f64) -> f64 {
    if range == 0.0 {
        return min;
    }
    pixel * range / length + min
}
