//! Alarm buzzer trait

/// Audible alarm output
pub trait Buzzer {
    /// Start or stop the tone
    fn set_on(&mut self, on: bool);

    /// Check if the tone is currently sounding
    fn is_on(&self) -> bool;
}
