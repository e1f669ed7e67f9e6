use glam::DVec2;

use crate::utils::format_label;

/// Capability contract for anything that can be charted.
///
/// The engine only reads `position()`; the label accessors and
/// `reverse_transform` are used to turn gridline positions and snapped
/// crosshair positions back into human-readable text.
pub trait Plottable: Sized {
    /// Position of the value in domain space.
    fn position(&self) -> DVec2;

    /// Label shown for this value on the horizontal axis.
    fn label_x(&self) -> String;

    /// Label shown for this value on the vertical axis.
    fn label_y(&self) -> String;

    /// Reconstructs a domain value from a raw domain-space position.
    fn reverse_transform(point: DVec2) -> Self;
}

impl Plottable for DVec2 {
    fn position(&self) -> DVec2 {
        *self
    }

    fn label_x(&self) -> String {
        format_label(self.x)
    }

    fn label_y(&self) -> String {
        format_label(self.y)
    }

    fn reverse_transform(point: DVec2) -> Self {
        point
    }
}
