//! Collaborator traits
//!
//! These traits define the interface between the application logic and
//! the widget renderer and hardware-specific implementations.

pub mod buzzer;
pub mod sensor;
pub mod widgets;

pub use buzzer::Buzzer;
pub use sensor::{SensorError, WeightSensor};
pub use widgets::{ScreenHandle, Tone, WidgetEngine, WidgetId};
