//! Alarm buzzer drivers

pub mod gpio;

pub use gpio::GpioBuzzer;
