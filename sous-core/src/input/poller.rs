//! Per-screen input poller
//!
//! One poller is live per active screen. Each sampling iteration walks the
//! screen's watched buttons in [`EVALUATION_ORDER`], waits out the settle
//! delay for any pending press, and hands confirmed presses to an
//! [`EventSink`]. The poller never touches widgets; the sink marshals
//! events to the UI context.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::config::InputConfig;
use crate::lifecycle::PollerLink;
use crate::state::{ButtonMask, LogicalButton};

use super::button::{PhysicalButton, EVALUATION_ORDER};
use super::debounce::DebounceState;

/// Read access to the four buttons
pub trait ButtonPins {
    /// Check if `button` is currently held down
    fn is_pressed(&self, button: PhysicalButton) -> bool;
}

/// Time source and cooperative sleep for the poller
#[allow(async_fn_in_trait)]
pub trait PollClock {
    /// Monotonic milliseconds
    fn now_ms(&self) -> u64;

    /// Yield to the scheduler for at least `ms` milliseconds
    async fn sleep_ms(&mut self, ms: u32);
}

/// Destination for confirmed presses
pub trait EventSink {
    /// Must not block: the UI may be waiting for this poller to stop
    fn emit(&mut self, button: LogicalButton);
}

/// Debouncing sampler for one screen
#[derive(Debug, Clone)]
pub struct InputPoller {
    watched: ButtonMask,
    settle_ms: u32,
    sample_ms: u32,
    states: [DebounceState; 4],
}

impl InputPoller {
    pub fn new(watched: ButtonMask, config: &InputConfig) -> Self {
        Self {
            watched,
            settle_ms: config.settle_ms,
            sample_ms: config.sample_ms,
            states: [DebounceState::default(); 4],
        }
    }

    /// Seed debounce state from the current pin levels
    ///
    /// A button still held from the previous screen must be released
    /// before it can fire here.
    pub fn arm<P: ButtonPins>(&mut self, pins: &P) {
        for button in EVALUATION_ORDER {
            self.states[button.index()] = DebounceState::new(!pins.is_pressed(button));
        }
    }

    /// Debounce state of one button
    pub fn state(&self, button: PhysicalButton) -> &DebounceState {
        &self.states[button.index()]
    }

    /// One sampling iteration. Returns the number of presses emitted.
    pub async fn scan<P, C, S>(&mut self, pins: &P, clock: &mut C, sink: &mut S) -> usize
    where
        P: ButtonPins,
        C: PollClock,
        S: EventSink,
    {
        let mut emitted = 0;

        for button in EVALUATION_ORDER {
            let logical = button.logical();
            if !self.watched.contains(logical) {
                continue;
            }

            let state = &mut self.states[button.index()];
            if state.observe(pins.is_pressed(button), clock.now_ms()) {
                clock.sleep_ms(self.settle_ms).await;
                // Re-sample the same pin that started the press
                if state.confirm(pins.is_pressed(button)) {
                    sink.emit(logical);
                    emitted += 1;
                }
            }
        }

        emitted
    }

    /// Sample until the link requests a stop, then acknowledge
    pub async fn run<M, P, C, S>(&mut self, link: &PollerLink<M>, pins: &P, clock: &mut C, sink: &mut S)
    where
        M: RawMutex,
        P: ButtonPins,
        C: PollClock,
        S: EventSink,
    {
        self.arm(pins);

        while !link.is_stop_requested() {
            self.scan(pins, clock, sink).await;
            if link.is_stop_requested() {
                break;
            }
            clock.sleep_ms(self.sample_ms).await;
        }

        link.acknowledge();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use heapless::Vec;

    /// Virtual clock shared with the scripted pins
    struct FakeClock<'a> {
        now: &'a Cell<u64>,
        stop_at: Option<(u64, &'a PollerLink<NoopRawMutex>)>,
    }

    impl PollClock for FakeClock<'_> {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }

        async fn sleep_ms(&mut self, ms: u32) {
            self.now.set(self.now.get() + ms as u64);
            if let Some((at, link)) = self.stop_at {
                if self.now.get() >= at {
                    link.request_stop();
                }
            }
        }
    }

    /// Buttons held over `[from, to)` intervals of virtual time
    struct ScriptedPins<'a> {
        now: &'a Cell<u64>,
        script: &'a [(PhysicalButton, u64, u64)],
    }

    impl ButtonPins for ScriptedPins<'_> {
        fn is_pressed(&self, button: PhysicalButton) -> bool {
            let t = self.now.get();
            self.script
                .iter()
                .any(|&(b, from, to)| b == button && t >= from && t < to)
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<LogicalButton, 16>);

    impl EventSink for Recorder {
        fn emit(&mut self, button: LogicalButton) {
            let _ = self.0.push(button);
        }
    }

    fn run_script(script: &[(PhysicalButton, u64, u64)], watched: ButtonMask, until: u64) -> Recorder {
        let now = Cell::new(0);
        let link: PollerLink<NoopRawMutex> = PollerLink::new();
        link.begin();

        let pins = ScriptedPins { now: &now, script };
        let mut clock = FakeClock {
            now: &now,
            stop_at: Some((until, &link)),
        };
        let mut sink = Recorder::default();
        let mut poller = InputPoller::new(watched, &InputConfig::default());

        block_on(poller.run(&link, &pins, &mut clock, &mut sink));
        sink
    }

    #[test]
    fn test_short_pulse_registers_nothing() {
        let sink = run_script(&[(PhysicalButton::Select, 100, 110)], ButtonMask::ALL, 1000);
        assert!(sink.0.is_empty());
    }

    #[test]
    fn test_long_hold_registers_once() {
        let sink = run_script(&[(PhysicalButton::Select, 100, 600)], ButtonMask::ALL, 2000);
        assert_eq!(sink.0.as_slice(), &[LogicalButton::Select]);
    }

    #[test]
    fn test_back_evaluated_last() {
        let script = [
            (PhysicalButton::Back, 100, 400),
            (PhysicalButton::Down, 100, 400),
        ];
        let sink = run_script(&script, ButtonMask::ALL, 1000);
        assert_eq!(sink.0.as_slice(), &[LogicalButton::Next, LogicalButton::Back]);
    }

    #[test]
    fn test_unwatched_button_ignored() {
        let script = [
            (PhysicalButton::Select, 100, 400),
            (PhysicalButton::Back, 500, 800),
        ];
        let watched = ButtonMask::of(&[LogicalButton::Back]);
        let sink = run_script(&script, watched, 1000);
        assert_eq!(sink.0.as_slice(), &[LogicalButton::Back]);
    }

    #[test]
    fn test_held_across_arm_needs_release() {
        // Held from before the poller started, then pressed again
        let script = [
            (PhysicalButton::Select, 0, 300),
            (PhysicalButton::Select, 500, 800),
        ];
        let sink = run_script(&script, ButtonMask::ALL, 1000);
        assert_eq!(sink.0.as_slice(), &[LogicalButton::Select]);
    }

    #[test]
    fn test_run_acknowledges_stop() {
        let now = Cell::new(0);
        let link: PollerLink<NoopRawMutex> = PollerLink::new();
        let generation = link.begin();
        link.request_stop();

        let pins = ScriptedPins { now: &now, script: &[] };
        let mut clock = FakeClock { now: &now, stop_at: None };
        let mut sink = Recorder::default();
        let mut poller = InputPoller::new(ButtonMask::ALL, &InputConfig::default());

        block_on(poller.run(&link, &pins, &mut clock, &mut sink));
        assert_eq!(block_on(link.wait_stopped()), generation);
        assert_eq!(now.get(), 0);
    }
}
