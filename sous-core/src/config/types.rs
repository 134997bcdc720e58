//! Configuration type definitions
//!
//! Every section has a `Default` matching the reference hardware, so a
//! partial `device.toml` only needs to name what differs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    pub display: DisplayConfig,
    pub input: InputConfig,
    pub ui: UiConfig,
    pub timer: TimerConfig,
    pub scale: ScaleConfig,
}

/// Panel geometry and bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Panel width in pixels
    pub width: u16,
    /// Panel height in pixels
    pub height: u16,
    /// SPI clock in Hz
    pub spi_hz: u32,
    /// Largest single data write in bytes
    pub max_chunk: u16,
    /// Memory-access control byte (orientation, RGB/BGR order)
    pub madctl: u8,
    /// Rows rendered per flush band
    pub band_rows: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 160,
            spi_hz: 16_000_000,
            max_chunk: 1024,
            madctl: 0x08,
            band_rows: 16,
        }
    }
}

/// Button sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Poll period
    pub sample_ms: u32,
    /// Press must still read low this long after the falling edge
    pub settle_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sample_ms: 10,
            settle_ms: 50,
        }
    }
}

/// User interface tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UiConfig {
    /// Pixels moved per Up/Down on scrollable screens
    pub scroll_step: i32,
    /// Render/flush period
    pub refresh_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            scroll_step: 25,
            refresh_ms: 20,
        }
    }
}

/// Countdown timer limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Largest settable duration in seconds
    pub max_s: u32,
    /// Up/Down adjustment in seconds
    pub step_s: u32,
    /// Alarm buzzer sounds while its line is low
    pub alarm_active_low: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            max_s: 3600,
            step_s: 30,
            alarm_active_low: false,
        }
    }
}

/// Load-cell sampling and calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScaleConfig {
    /// Time between displayed readings
    pub interval_ms: u32,
    /// Raw conversions averaged per reading
    pub samples: u8,
    /// Raw counts per gram after tare
    pub counts_per_gram: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            samples: 10,
            counts_per_gram: 420.0,
        }
    }
}
