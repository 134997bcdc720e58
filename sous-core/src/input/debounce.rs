//! Press-edge debounce

/// Debounce state of one button
///
/// A press is confirmed when the button reads pressed on a sample while
/// `released` is set, and still reads pressed after the settle delay.
/// Confirmation clears `released`; only a sample that reads not-pressed
/// sets it again, so each low→high→low cycle reports at most one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceState {
    stable_pressed: bool,
    released: bool,
    last_fall_ms: Option<u64>,
}

impl Default for DebounceState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DebounceState {
    /// `released` false means the button must be let go before it can fire
    pub const fn new(released: bool) -> Self {
        Self {
            stable_pressed: !released,
            released,
            last_fall_ms: None,
        }
    }

    /// Record a sample. Returns true if a press is pending confirmation.
    pub fn observe(&mut self, pressed: bool, now_ms: u64) -> bool {
        if !pressed {
            self.released = true;
            self.stable_pressed = false;
            return false;
        }
        if self.released {
            self.last_fall_ms = Some(now_ms);
            return true;
        }
        false
    }

    /// Re-sample after the settle delay. Returns true if the press counts.
    pub fn confirm(&mut self, still_pressed: bool) -> bool {
        if still_pressed {
            self.released = false;
            self.stable_pressed = true;
        }
        still_pressed
    }

    pub const fn is_released(&self) -> bool {
        self.released
    }

    pub const fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// Time of the most recent falling edge that started a confirmation
    pub const fn last_fall_ms(&self) -> Option<u64> {
        self.last_fall_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count presses reported for a button driven by `level_at(ms)`
    ///
    /// Runs the debounce rule over a timeline sampled every `sample_ms`
    /// until `end_ms`, including the settle wait after a pending press.
    fn count_presses(
        level_at: impl Fn(u64) -> bool,
        sample_ms: u64,
        settle_ms: u64,
        end_ms: u64,
    ) -> usize {
        let mut state = DebounceState::default();
        let mut presses = 0;
        let mut now = 0;

        while now < end_ms {
            if state.observe(level_at(now), now) {
                now += settle_ms;
                if state.confirm(level_at(now)) {
                    presses += 1;
                }
            }
            now += sample_ms;
        }
        presses
    }

    fn pulse(from: u64, to: u64) -> impl Fn(u64) -> bool {
        move |t| t >= from && t < to
    }

    #[test]
    fn test_short_glitch_ignored() {
        assert_eq!(count_presses(pulse(100, 110), 10, 50, 1000), 0);
    }

    #[test]
    fn test_long_hold_reports_once() {
        assert_eq!(count_presses(pulse(100, 600), 10, 50, 2000), 1);
    }

    #[test]
    fn test_two_distinct_presses() {
        let timeline = |t: u64| (100..300).contains(&t) || (500..700).contains(&t);
        assert_eq!(count_presses(timeline, 10, 50, 1000), 2);
    }

    #[test]
    fn test_held_at_arm_needs_release() {
        let mut state = DebounceState::new(false);
        assert!(!state.observe(true, 0));
        assert!(!state.observe(true, 10));
        assert!(!state.observe(false, 20));
        assert!(state.observe(true, 30));
        assert!(state.confirm(true));
        assert_eq!(state.last_fall_ms(), Some(30));
    }

    #[test]
    fn test_failed_confirm_keeps_armed() {
        let mut state = DebounceState::default();
        assert!(state.observe(true, 0));
        assert!(!state.confirm(false));
        assert!(state.is_released());
        assert!(!state.is_pressed());
    }
}
