//! smooth_chart: geometry engine for smooth line charts

pub mod chart;
pub mod config;
pub mod curve;
pub mod data_types;
pub mod lookup;
pub mod theme;
pub mod ticks;
pub mod transform;
pub mod utils;

pub use chart::{ChartLayout, SmoothLineChart};
pub use config::ChartConfig;
pub use curve::{BezierSegment, CurveMode, SmoothPath};
pub use data_types::{Axis, Extents, Plottable, PointSet, PressState, SmoothLineConfig, Zone};
pub use lookup::{LookupTable, SharedLookupTable};
pub use theme::{Color, LineStyle};
pub use transform::{PlotTransform, Viewport};
