//! Active buzzer on a GPIO line
//!
//! A self-oscillating buzzer sounds for as long as its line sits at the
//! active level. Boards that switch it through a PNP transistor sound on
//! low; `TimerConfig::alarm_active_low` selects that wiring.

use sous_core::config::TimerConfig;
use sous_core::traits::Buzzer;
use sous_hal::OutputPin;

pub struct GpioBuzzer<P> {
    pin: P,
    active_low: bool,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Take over the line and drive it to the silent level
    pub fn new(mut pin: P, config: &TimerConfig) -> Self {
        pin.set_state(config.alarm_active_low);
        Self {
            pin,
            active_low: config.alarm_active_low,
        }
    }
}

impl<P: OutputPin> Buzzer for GpioBuzzer<P> {
    fn set_on(&mut self, on: bool) {
        self.pin.set_state(on != self.active_low);
    }

    // Derived from the line level
    fn is_on(&self) -> bool {
        self.pin.is_set_high() != self.active_low
    }
}
