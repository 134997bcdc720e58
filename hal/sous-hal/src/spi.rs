//! Transmit-only SPI for the panel link
//!
//! The ST7735 on these boards has no MISO line wired, so the bus only
//! ever shifts bytes out.

/// Outgoing SPI link
///
/// Chip select is owned by the implementation. A call returns only once
/// the last bit has left the shifter, so the caller may toggle D/C right
/// after it.
pub trait SpiBus {
    type Error;

    /// Shift `data` out, MSB first
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Clock settings for an SPI link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    pub frequency: u32,
    pub mode: Mode,
}

impl SpiConfig {
    /// ST7735 timing: clock idles high, sampled on the rising edge
    pub const fn panel(frequency: u32) -> Self {
        Self {
            frequency,
            mode: Mode::Mode3,
        }
    }
}

/// Idle level of SCK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    IdleLow,
    IdleHigh,
}

/// Which SCK edge the receiver samples on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    CaptureOnFirstTransition,
    CaptureOnSecondTransition,
}

/// The four CPOL/CPHA combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

impl Mode {
    pub const fn parts(self) -> (Polarity, Phase) {
        let polarity = match self {
            Mode::Mode0 | Mode::Mode1 => Polarity::IdleLow,
            Mode::Mode2 | Mode::Mode3 => Polarity::IdleHigh,
        };
        let phase = match self {
            Mode::Mode0 | Mode::Mode2 => Phase::CaptureOnFirstTransition,
            Mode::Mode1 | Mode::Mode3 => Phase::CaptureOnSecondTransition,
        };
        (polarity, phase)
    }
}
