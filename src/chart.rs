//! Chart Model
//!
//! `SmoothLineChart` ties together the point set, its configuration and the
//! crosshair lookup table. The host calls [`SmoothLineChart::layout`] once per
//! viewport size (or data change) and [`SmoothLineChart::press`] for every
//! drag update; it owns all rendering.

use glam::DVec2;
use tracing::{debug, trace};

use crate::curve::{self, SmoothPath};
use crate::data_types::{
    clip_zones, Axis, Plottable, PointSet, PressState, SmoothLineConfig, Zone, ZoneBand,
};
use crate::lookup::LookupTable;
use crate::ticks::gridlines;
use crate::transform::Viewport;

/// Everything needed to draw one frame at a given viewport size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub path: SmoothPath,
    /// Y offsets of the horizontal gridlines.
    pub horizontal_lines: Vec<f64>,
    /// X offsets of the vertical gridlines.
    pub vertical_lines: Vec<f64>,
    /// Labels along the vertical axis, top to bottom.
    pub vertical_ticks: Vec<String>,
    /// Labels along the horizontal axis, left to right.
    pub horizontal_ticks: Vec<String>,
    /// Data point markers, empty unless points are shown.
    pub markers: Vec<DVec2>,
    pub zones: Vec<ZoneBand>,
}

pub struct SmoothLineChart<P> {
    data: PointSet<P>,
    config: SmoothLineConfig,
    zones: Vec<Zone>,
    lookup: LookupTable,
    press: PressState,
}

impl<P: Plottable> SmoothLineChart<P> {
    pub fn new(points: Vec<P>, config: SmoothLineConfig) -> Self {
        let data = PointSet::new(points);
        let zones = clip_zones(&config.zones, &data.extents());
        if zones.len() != config.zones.len() {
            debug!(
                kept = zones.len(),
                configured = config.zones.len(),
                "dropped zones outside the data range"
            );
        }
        let lookup = LookupTable::new(config.lookup_resolution);
        Self {
            data,
            config,
            zones,
            lookup,
            press: PressState::default(),
        }
    }

    pub fn data(&self) -> &PointSet<P> {
        &self.data
    }

    pub fn config(&self) -> &SmoothLineConfig {
        &self.config
    }

    /// Zones clipped to the data's vertical extent.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn lookup(&self) -> &LookupTable {
        &self.lookup
    }

    pub fn press_state(&self) -> &PressState {
        &self.press
    }

    /// Smooth path through the data mapped into `viewport`.
    ///
    /// Empty when the data or the viewport cannot be mapped.
    pub fn path(&self, viewport: Viewport) -> SmoothPath {
        if self.data.transform(viewport).is_degenerate() {
            return SmoothPath::default();
        }
        let points = self.data.to_screen(viewport);
        curve::build_path(&points, self.config.curve, viewport.width)
    }

    /// Computes the frame layout and rebuilds the lookup table from its path.
    pub fn layout(&mut self, viewport: Viewport) -> ChartLayout {
        let path = self.path(viewport);
        self.lookup.update(&path);

        let transform = self.data.transform(viewport);
        let has_data = !self.data.is_empty();
        let (horizontal_lines, vertical_lines) = if has_data {
            (
                gridlines(viewport.height, self.config.y_ticks),
                gridlines(viewport.width, self.config.x_ticks),
            )
        } else {
            (Vec::new(), Vec::new())
        };
        let markers = if self.config.show_points {
            self.data.to_screen(viewport)
        } else {
            Vec::new()
        };
        let zones = if transform.is_degenerate() {
            Vec::new()
        } else {
            self.zones.iter().map(|z| z.band(&transform)).collect()
        };

        debug!(
            width = viewport.width,
            height = viewport.height,
            points = self.data.len(),
            curves = path.curves().len(),
            "laid out smooth line chart"
        );

        ChartLayout {
            viewport,
            path,
            horizontal_lines,
            vertical_lines,
            vertical_ticks: self.data.vertical_ticks(self.config.y_ticks),
            horizontal_ticks: self.data.horizontal_ticks(self.config.x_ticks),
            markers,
            zones,
        }
    }

    /// Updates the indicator for a pointer at `location`.
    ///
    /// The pointer is snapped horizontally onto the drawn curve, the snapped
    /// position is mapped back into domain space, and the label of the
    /// nearest data point (horizontally) becomes the indicator text.
    pub fn press(&mut self, location: DVec2, viewport: Viewport) -> &PressState {
        if self.data.is_empty() {
            self.press.visible = false;
            self.press.selection_changed = false;
            return &self.press;
        }

        self.press.indicator = self.lookup.closest(location, &[Axis::Horizontal]);
        self.press.press_position = location;

        if viewport.contains_x(location.x) && !self.lookup.is_empty() {
            let transform = self.data.transform(viewport);
            let domain = transform.screen_to_data(self.press.indicator);
            let closest = self.data.closest_point(domain, &[Axis::Horizontal]);
            let text = P::reverse_transform(closest).label_y();

            self.press.selection_changed = self.press.text != text;
            self.press.text = text;
            self.press.visible = true;
            trace!(x = location.x, label = %self.press.text, "press");
        } else {
            self.press.visible = false;
            self.press.selection_changed = false;
        }
        &self.press
    }

    /// Hides the indicator when the gesture ends.
    pub fn release(&mut self) {
        self.press.visible = false;
        self.press.selection_changed = false;
    }
}
