//! Board-agnostic core logic for the kitchen controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Screen identities and the navigation transition table
//! - Highlight and scroll state for the active screen
//! - Button debounce and the per-screen input poller
//! - The poller stop/acknowledge handshake
//! - Recipe document model and the shared recipe context
//! - Screen content preparation and widget construction
//! - Countdown timer state
//! - The navigation controller that ties it together
//! - Collaborator traits (widget engine, weight sensor, buzzer)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod lifecycle;
pub mod nav;
pub mod recipe;
pub mod scale;
pub mod screens;
pub mod state;
pub mod timer;
pub mod traits;
