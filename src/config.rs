//! Loading and validation of chart configuration files.

use std::path::Path;

use eyre::{ensure, Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::CurveMode;
use crate::data_types::SmoothLineConfig;
use crate::theme::LineStyle;

/// Chart options together with the style handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub chart: SmoothLineConfig,
    pub style: LineStyle,
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).wrap_err("failed to parse chart config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read chart config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .wrap_err_with(|| format!("invalid chart config {}", path.display()))?;
        debug!(path = %path.display(), "loaded chart config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize chart config")
    }

    pub fn validate(&self) -> Result<()> {
        let chart = &self.chart;
        if let CurveMode::Adaptive { step } = chart.curve {
            ensure!(
                step.is_finite() && step > 0.0 && step <= 1.0,
                "adaptive step must be in (0, 1], got {step}"
            );
        }
        ensure!(
            chart.lookup_resolution.is_finite() && chart.lookup_resolution > 0.0,
            "lookup resolution must be positive, got {}",
            chart.lookup_resolution
        );
        for (i, zone) in chart.zones.iter().enumerate() {
            ensure!(
                zone.min.is_finite() && zone.max.is_finite(),
                "zone {i} has a non-finite bound"
            );
            ensure!(
                zone.min <= zone.max,
                "zone {i} has min {} above max {}",
                zone.min,
                zone.max
            );
        }
        Ok(())
    }
}
