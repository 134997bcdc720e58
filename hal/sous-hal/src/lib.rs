//! Sous Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the kitchen
//! controller needs. Chip-specific crates implement them; drivers and the
//! display transport are written against them so they can be exercised on
//! the host with recording fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  sous-display / sous-drivers            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sous-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ sous-hal-     │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::ActiveLowButton`] - Pressed state of a pulled-up button
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`delay::Delay`] - Blocking settle delays
//! - [`delay::AsyncDelay`] - Millisecond waits that yield to the executor

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::{AsyncDelay, Delay};
pub use gpio::{ActiveLowButton, InputPin, OutputPin};
pub use spi::SpiBus;
