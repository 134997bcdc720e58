//! Blocking delays
//!
//! Used where a peripheral needs a fixed settle time between operations
//! (panel reset and init steps, load-cell clock pulses).

/// Blocking delay provider
pub trait Delay {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Delay that yields to the executor instead of spinning
///
/// Used for waits measured in milliseconds inside async tasks, such as
/// waiting for a converter to finish.
#[allow(async_fn_in_trait)]
pub trait AsyncDelay {
    async fn wait_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
