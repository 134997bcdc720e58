//! GPIO pin abstractions
//!
//! The buttons are inputs; the panel's data/command and reset lines, the
//! buzzer and the load-cell clock are outputs.

/// Push-pull output
///
/// Writes are infallible on every chip this controller targets.
pub trait OutputPin {
    fn set_high(&mut self);

    fn set_low(&mut self);

    /// Drive the pin to `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level last written to the pin
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Reads are infallible: an unreadable pin is indistinguishable from its
/// idle level.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Push button wired to ground with a pull-up
///
/// The line idles high and reads low while the button is held.
pub trait ActiveLowButton: InputPin {
    /// Check if the button is currently held down
    fn is_pressed(&self) -> bool {
        self.is_low()
    }
}

impl<T: InputPin> ActiveLowButton for T {}
