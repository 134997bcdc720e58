//! Display side of the Sous controller
//!
//! This crate provides:
//! - [`DisplayTransport`]: command/data framing for an ST7735-class panel
//!   over SPI with a data/command line and a reset line
//! - [`FlushAdapter`]: turns a dirty rectangle plus RGB565 pixels into
//!   window-addressing commands and a pixel stream
//! - [`WidgetTree`]: a small retained widget tree implementing the core
//!   widget engine, rendered in horizontal bands through the flush adapter
//!
//! # Architecture
//!
//! ```text
//!  Controller ──▶ WidgetTree ──render──▶ FlushAdapter ──▶ DisplayTransport ──▶ panel
//!                 (widgets)    (bands)   (CASET/RASET/    (D/C line, chunked
//!                                         RAMWR + pixels)  SPI writes)
//! ```
//!
//! Everything here is blocking and must be driven from the single UI
//! context.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod error;
pub mod flush;
pub mod st7735;
pub mod transport;
pub mod window;

// Re-export key types
pub use canvas::WidgetTree;
pub use error::{FlushError, TransportError, WindowError};
pub use flush::{FlushAdapter, FlushReady};
pub use transport::DisplayTransport;
pub use window::{DisplayWindow, Panel};
