//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware embeds them as
//! postcard binary data produced by its build script from `device.toml`.

#[cfg(feature = "serde")]
pub mod load;
pub mod types;

#[cfg(feature = "serde")]
pub use load::*;
pub use types::*;
