use serde::{Deserialize, Serialize};

use super::axis::Extents;
use crate::theme::Color;
use crate::transform::PlotTransform;

/// Background band covering a range of domain y values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub min: f64,
    pub max: f64,
    pub color: Color,
}

impl Zone {
    pub fn new(min: f64, max: f64, color: Color) -> Self {
        Self { min, max, color }
    }

    /// Screen-space band of this zone, spanning the full viewport width.
    pub fn band(&self, transform: &PlotTransform) -> ZoneBand {
        let top = transform.y_data_to_screen(self.max);
        let bottom = transform.y_data_to_screen(self.min);
        ZoneBand {
            top,
            height: (bottom - top).abs(),
            color: self.color,
        }
    }
}

/// A zone mapped into the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneBand {
    pub top: f64,
    pub height: f64,
    pub color: Color,
}

/// Drops zones lying entirely outside `[y_min, y_max]` and clamps the rest to it.
pub fn clip_zones(zones: &[Zone], extents: &Extents) -> Vec<Zone> {
    zones
        .iter()
        .filter(|z| z.min <= extents.y_max && z.max >= extents.y_min)
        .map(|z| Zone {
            min: z.min.max(extents.y_min),
            max: z.max.min(extents.y_max),
            color: z.color,
        })
        .collect()
}
