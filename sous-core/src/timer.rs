//! Countdown timer state
//!
//! The setpoint moves in fixed steps between zero and a maximum. Once
//! started, the countdown is driven by one-second ticks from the firmware
//! and keeps running when the timer screen is left.

use core::fmt::Write;

use heapless::String;

use crate::config::TimerConfig;

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Countdown not running
    Idle,
    /// Still running; seconds left after this tick
    Running(u32),
    /// Reached zero on this tick. Reported exactly once per run.
    Expired,
}

/// Setpoint and countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerState {
    setpoint_s: u32,
    remaining_s: u32,
    running: bool,
    max_s: u32,
    step_s: u32,
}

impl TimerState {
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            setpoint_s: 0,
            remaining_s: 0,
            running: false,
            max_s: config.max_s,
            step_s: config.step_s.max(1),
        }
    }

    pub const fn setpoint_s(&self) -> u32 {
        self.setpoint_s
    }

    pub const fn remaining_s(&self) -> u32 {
        self.remaining_s
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Raise the setpoint by one step, up to the maximum
    ///
    /// Ignored while running. Returns true if the setpoint changed.
    pub fn increment(&mut self) -> bool {
        if self.running {
            return false;
        }
        let next = self.setpoint_s.saturating_add(self.step_s).min(self.max_s);
        let changed = next != self.setpoint_s;
        self.setpoint_s = next;
        changed
    }

    /// Lower the setpoint by one step, down to zero
    ///
    /// Ignored while running. Returns true if the setpoint changed.
    pub fn decrement(&mut self) -> bool {
        if self.running {
            return false;
        }
        let next = self.setpoint_s.saturating_sub(self.step_s);
        let changed = next != self.setpoint_s;
        self.setpoint_s = next;
        changed
    }

    /// Start if stopped, stop if running
    ///
    /// A zero setpoint does not start. Returns true if now running.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.running = false;
            self.remaining_s = 0;
        } else if self.setpoint_s > 0 {
            self.running = true;
            self.remaining_s = self.setpoint_s;
        }
        self.running
    }

    /// Advance the countdown by one second
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining_s = self.remaining_s.saturating_sub(1);
        if self.remaining_s == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining_s)
        }
    }
}

/// Format seconds as `MM:SS`
pub fn format_mmss(total_s: u32) -> String<8> {
    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}", total_s / 60, total_s % 60);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> TimerState {
        TimerState::new(&TimerConfig::default())
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0).as_str(), "00:00");
        assert_eq!(format_mmss(90).as_str(), "01:30");
        assert_eq!(format_mmss(3600).as_str(), "60:00");
    }

    #[test]
    fn test_setpoint_saturates() {
        let mut t = timer();
        assert!(!t.decrement());
        for _ in 0..200 {
            t.increment();
        }
        assert_eq!(t.setpoint_s(), 3600);
        assert!(!t.increment());
    }

    #[test]
    fn test_zero_setpoint_does_not_start() {
        let mut t = timer();
        assert!(!t.toggle());
        assert_eq!(t.tick(), Tick::Idle);
    }

    #[test]
    fn test_ninety_seconds_expires_once() {
        let mut t = timer();
        t.increment();
        t.increment();
        t.increment();
        assert_eq!(t.setpoint_s(), 90);
        assert!(t.toggle());

        let mut expired = 0;
        for _ in 0..90 {
            if t.tick() == Tick::Expired {
                expired += 1;
            }
        }
        assert_eq!(expired, 1);
        assert_eq!(t.remaining_s(), 0);
        assert_eq!(format_mmss(t.remaining_s()).as_str(), "00:00");

        // Further ticks do nothing
        for _ in 0..10 {
            assert_eq!(t.tick(), Tick::Idle);
        }
    }

    #[test]
    fn test_stop_resets_remaining() {
        let mut t = timer();
        t.increment();
        t.toggle();
        assert_eq!(t.tick(), Tick::Running(29));
        assert!(!t.toggle());
        assert_eq!(t.remaining_s(), 0);
        assert_eq!(t.setpoint_s(), 30);
    }

    #[test]
    fn test_setpoint_locked_while_running() {
        let mut t = timer();
        t.increment();
        t.toggle();
        assert!(!t.increment());
        assert!(!t.decrement());
        assert_eq!(t.setpoint_s(), 30);
    }
}
