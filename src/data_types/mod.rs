pub mod axis;
pub mod plot_configs;
pub mod plottable;
pub mod point_set;
pub mod state;
pub mod zones;

pub use axis::*;
pub use plot_configs::*;
pub use plottable::*;
pub use point_set::*;
pub use state::*;
pub use zones::*;
