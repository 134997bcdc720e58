//! Button input
//!
//! Four active-low buttons are sampled by one poller per active screen.
//! Debounce is applied to the press edge only and is expressed as a pure
//! state update over timestamped samples, so the whole pipeline runs on
//! the host against scripted pin timelines.

pub mod button;
pub mod debounce;
pub mod poller;

pub use button::{PhysicalButton, EVALUATION_ORDER};
pub use debounce::DebounceState;
pub use poller::{ButtonPins, EventSink, InputPoller, PollClock};
