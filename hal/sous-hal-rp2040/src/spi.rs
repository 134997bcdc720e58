//! Blocking SPI master

use embassy_rp::spi::{self, Blocking, Instance, Spi};
use sous_hal::spi::{Phase, Polarity, SpiConfig};
use sous_hal::SpiBus;

/// Build an `embassy-rp` SPI configuration
pub fn rp_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase) = config.mode.parts();
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}

/// Blocking transmit-only SPI; every write returns after the last bit is shifted out
pub struct RpSpi<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpi<'d, T> {
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<T: Instance> SpiBus for RpSpi<'_, T> {
    type Error = spi::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }
}
