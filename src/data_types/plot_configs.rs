use serde::{Deserialize, Serialize};

use super::zones::Zone;
use crate::curve::path::DEFAULT_RESOLUTION;
use crate::curve::CurveMode;

/// Per-instance options of a smooth line chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothLineConfig {
    pub curve: CurveMode,
    /// Steps along the horizontal axis (vertical gridlines, x labels).
    pub x_ticks: usize,
    /// Steps along the vertical axis (horizontal gridlines, y labels).
    pub y_ticks: usize,
    pub show_points: bool,
    pub zones: Vec<Zone>,
    /// Sampling distance in pixels used for the crosshair lookup table.
    pub lookup_resolution: f64,
}

impl Default for SmoothLineConfig {
    fn default() -> Self {
        Self {
            curve: CurveMode::default(),
            x_ticks: 4,
            y_ticks: 4,
            show_points: false,
            zones: Vec::new(),
            lookup_resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl SmoothLineConfig {
    pub fn adaptive(mut self, step: f64) -> Self {
        self.curve = CurveMode::Adaptive { step };
        self
    }

    pub fn bounded(mut self) -> Self {
        self.curve = CurveMode::bounded();
        self
    }

    pub fn natural(mut self) -> Self {
        self.curve = CurveMode::Natural;
        self
    }

    pub fn ticks(mut self, x: usize, y: usize) -> Self {
        self.x_ticks = x;
        self.y_ticks = y;
        self
    }

    pub fn points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    pub fn zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }
}
