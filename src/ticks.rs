//! Gridline offsets and axis tick labels.
//!
//! The value range is split into `count` equal steps, producing `count + 1`
//! labels. Vertical ticks run from the top of the chart down, matching the
//! mirrored screen space; horizontal ticks run left to right.

use glam::DVec2;

use crate::data_types::{Extents, Plottable};

/// Labels for the vertical axis, descending from `y_max` to `y_min`.
pub fn vertical_ticks<P: Plottable>(extents: &Extents, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let step = extents.ranges().y / count as f64;
    (0..=count)
        .map(|i| {
            let point = DVec2::new(extents.x_min, extents.y_max - i as f64 * step);
            P::reverse_transform(point).label_y()
        })
        .collect()
}

/// Labels for the horizontal axis, ascending from `x_min` to `x_max`.
pub fn horizontal_ticks<P: Plottable>(extents: &Extents, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }
    let step = extents.ranges().x / count as f64;
    (0..=count)
        .map(|i| {
            let point = DVec2::new(extents.x_min + i as f64 * step, extents.y_min);
            P::reverse_transform(point).label_x()
        })
        .collect()
}

/// Pixel offsets of `count + 1` evenly spaced gridlines across `length`.
///
/// Horizontal gridlines use the viewport height, vertical ones its width.
pub fn gridlines(length: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = length / count as f64;
    (0..=count).map(|i| step * i as f64).collect()
}
