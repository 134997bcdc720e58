//! Delays on the embassy time driver

use embassy_time::{Delay as TimeDelay, Timer};
use embedded_hal::delay::DelayNs;
use sous_hal::{AsyncDelay, Delay};

/// `Delay` busy-waits and is only for short settle times; `AsyncDelay`
/// parks the calling task on a timer
#[derive(Debug, Clone, Copy, Default)]
pub struct RpDelay;

impl Delay for RpDelay {
    fn delay_ms(&mut self, ms: u32) {
        TimeDelay.delay_ms(ms);
    }

    fn delay_us(&mut self, us: u32) {
        TimeDelay.delay_us(us);
    }
}

impl AsyncDelay for RpDelay {
    async fn wait_ms(&mut self, ms: u32) {
        Timer::after_millis(ms as u64).await;
    }
}
