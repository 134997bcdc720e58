//! RP2040 HAL for the Sous firmware
//!
//! Thin wrappers that implement the chip-agnostic `sous-hal` traits over
//! `embassy-rp` peripherals:
//!
//! - [`gpio::RpOutput`] / [`gpio::RpInput`]: GPIO
//! - [`spi::RpSpi`]: blocking SPI master for the panel
//! - [`delay::RpDelay`]: busy-wait delays on the embassy time driver

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod spi;

pub use delay::RpDelay;
pub use gpio::{RpInput, RpOutput};
pub use spi::RpSpi;

// Re-export shared traits from sous-hal for convenience
pub use sous_hal::{ActiveLowButton, AsyncDelay, Delay, InputPin, OutputPin, SpiBus};
