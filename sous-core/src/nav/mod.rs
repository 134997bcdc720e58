//! Navigation controller
//!
//! Consumes logical button events for the active screen, moves the
//! highlight or scroll position, and executes screen transitions with the
//! poller stop/acknowledge handshake.

pub mod controller;
pub mod selection;

pub use controller::{Controller, Outcome};
pub use selection::{NavigationState, ScrollState};
