use glam::DVec2;

/// State of the "press to inspect" indicator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressState {
    pub visible: bool,
    /// Raw pointer location in viewport pixels.
    pub press_position: DVec2,
    /// Location snapped onto the drawn curve.
    pub indicator: DVec2,
    /// Vertical-axis label of the nearest data point.
    pub text: String,
    /// The label differs from the one shown by the previous update.
    /// Hosts use it to trigger selection feedback.
    pub selection_changed: bool,
}
