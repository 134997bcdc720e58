//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! sous-core, written against the `sous-hal` pin and delay traits:
//!
//! - Load cell ADC (HX711) for the kitchen scale
//! - GPIO buzzer for the timer alarm

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod sensor;
