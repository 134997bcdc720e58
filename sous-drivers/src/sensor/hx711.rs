//! HX711 load-cell ADC
//!
//! 24-bit bridge converter with a two-wire interface. DOUT falls when a
//! conversion is ready; the host then clocks 24 data bits out MSB first
//! on PD_SCK, followed by 1-3 extra pulses that select the next
//! conversion's channel and gain.
//!
//! ```text
//! DOUT  ‾‾‾\____<b23><b22> ... <b0>______
//! SCK   ______/‾\_/‾\_ ... _/‾\_/‾\______
//!                1   2       24  25 (gain)
//! ```

use sous_core::config::ScaleConfig;
use sous_core::traits::{SensorError, WeightSensor};
use sous_hal::{AsyncDelay, Delay, InputPin, OutputPin};

/// Extra clock pulses after the data bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// Channel A, gain 128 (1 pulse)
    A128,
    /// Channel B, gain 32 (2 pulses)
    B32,
    /// Channel A, gain 64 (3 pulses)
    A64,
}

impl Gain {
    const fn pulses(self) -> u8 {
        match self {
            Gain::A128 => 1,
            Gain::B32 => 2,
            Gain::A64 => 3,
        }
    }
}

/// Ready polls before giving up; two conversion periods at 10 SPS
const READY_POLLS: u32 = 200;
const READY_POLL_MS: u32 = 1;

/// Converter rails: readings pinned here are saturated
const RAW_MAX: i32 = 0x7F_FFFF;
const RAW_MIN: i32 = -0x80_0000;

/// HX711 driver
pub struct Hx711<DOUT, SCK, D> {
    dout: DOUT,
    sck: SCK,
    delay: D,
    gain: Gain,
    offset: i32,
    counts_per_gram: f32,
    samples: u8,
}

impl<DOUT, SCK, D> Hx711<DOUT, SCK, D>
where
    DOUT: InputPin,
    SCK: OutputPin,
    D: Delay,
{
    /// Create a driver; call [`tare`](WeightSensor::tare) before reading
    pub fn new(dout: DOUT, mut sck: SCK, delay: D, config: &ScaleConfig) -> Self {
        // SCK held high for >60 us powers the chip down
        sck.set_low();
        Self {
            dout,
            sck,
            delay,
            gain: Gain::A128,
            offset: 0,
            counts_per_gram: if config.counts_per_gram == 0.0 {
                1.0
            } else {
                config.counts_per_gram
            },
            samples: config.samples.max(1),
        }
    }

    /// Zero point in raw counts
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Wait for DOUT to fall
    fn wait_ready(&mut self) -> Result<(), SensorError> {
        for _ in 0..READY_POLLS {
            if self.dout.is_low() {
                return Ok(());
            }
            self.delay.delay_ms(READY_POLL_MS);
        }
        Err(SensorError::NotReady)
    }

    fn pulse(&mut self) {
        self.sck.set_high();
        self.delay.delay_us(1);
        self.sck.set_low();
        self.delay.delay_us(1);
    }

    /// One signed 24-bit conversion
    pub fn read_raw(&mut self) -> Result<i32, SensorError> {
        self.wait_ready()?;

        let mut value: u32 = 0;
        for _ in 0..24 {
            self.sck.set_high();
            self.delay.delay_us(1);
            value = (value << 1) | self.dout.is_high() as u32;
            self.sck.set_low();
            self.delay.delay_us(1);
        }
        for _ in 0..self.gain.pulses() {
            self.pulse();
        }

        // Sign-extend from bit 23
        let raw = ((value << 8) as i32) >> 8;
        if raw == RAW_MAX || raw == RAW_MIN {
            return Err(SensorError::OutOfRange);
        }
        Ok(raw)
    }

}

impl<DOUT, SCK, D> Hx711<DOUT, SCK, D>
where
    DOUT: InputPin,
    SCK: OutputPin,
    D: Delay + AsyncDelay,
{
    /// Yield until DOUT falls
    async fn settle(&mut self) -> Result<(), SensorError> {
        for _ in 0..READY_POLLS {
            if self.dout.is_low() {
                return Ok(());
            }
            self.delay.wait_ms(READY_POLL_MS).await;
        }
        Err(SensorError::NotReady)
    }

    /// Mean of the configured number of conversions
    async fn average(&mut self) -> Result<i32, SensorError> {
        let mut sum: i64 = 0;
        for _ in 0..self.samples {
            self.settle().await?;
            sum += self.read_raw()? as i64;
        }
        Ok((sum / self.samples as i64) as i32)
    }
}

impl<DOUT, SCK, D> WeightSensor for Hx711<DOUT, SCK, D>
where
    DOUT: InputPin,
    SCK: OutputPin,
    D: Delay + AsyncDelay,
{
    async fn tare(&mut self) -> Result<(), SensorError> {
        self.offset = self.average().await?;
        Ok(())
    }

    async fn read_grams(&mut self) -> Result<f32, SensorError> {
        let raw = self.average().await?;
        Ok((raw - self.offset) as f32 / self.counts_per_gram)
    }
}
