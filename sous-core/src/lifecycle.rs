//! Poller task lifecycle
//!
//! A screen's widget tree may only be torn down after its poller has left
//! its sampling loop. The controller asks the poller to stop and then
//! waits for the poller's own acknowledgement; the poller checks the stop
//! request between sampling iterations and acknowledges as its last act.
//!
//! ```text
//! controller                      poller
//!     │ request_stop ───────────────▶ │ (finishes current iteration)
//!     │                               │ acknowledge
//!     │ ◀──────────────── wait_stopped│
//!     │ destroy widgets               ╳
//!     │ build next screen
//!     │ begin + spawn ─────────────▶ new poller
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::error::ResourceError;
use crate::state::{ButtonMask, LogicalButton, ScreenId};

/// Stop/acknowledge handshake between the controller and the live poller
pub struct PollerLink<M: RawMutex> {
    stop: Signal<M, ()>,
    stopped: Signal<M, u32>,
    generation: Mutex<M, Cell<u32>>,
}

impl<M: RawMutex> Default for PollerLink<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> PollerLink<M> {
    pub const fn new() -> Self {
        Self {
            stop: Signal::new(),
            stopped: Signal::new(),
            generation: Mutex::new(Cell::new(0)),
        }
    }

    /// Arm the link for a new poller and return its generation
    ///
    /// Must only be called once the previous poller has acknowledged.
    pub fn begin(&self) -> u32 {
        self.stop.reset();
        self.stopped.reset();
        self.generation.lock(|g| {
            let next = g.get().wrapping_add(1);
            g.set(next);
            next
        })
    }

    /// Generation of the most recently started poller
    pub fn generation(&self) -> u32 {
        self.generation.lock(|g| g.get())
    }

    /// Ask the live poller to leave its loop
    pub fn request_stop(&self) {
        self.stop.signal(());
    }

    /// Polled by the poller between iterations
    pub fn is_stop_requested(&self) -> bool {
        self.stop.signaled()
    }

    /// Called by the poller after it has left its loop
    pub fn acknowledge(&self) {
        self.stopped.signal(self.generation());
    }

    /// Wait for the poller's acknowledgement; returns its generation
    pub async fn wait_stopped(&self) -> u32 {
        self.stopped.wait().await
    }

    /// Request a stop and wait for the acknowledgement
    pub async fn stop_and_join(&self) -> u32 {
        self.request_stop();
        self.wait_stopped().await
    }
}

/// A confirmed press, tagged with the poller generation that saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub generation: u32,
    pub button: LogicalButton,
}

/// Press queue from the live poller to the controller, with its handshake
///
/// Presses never outlive the poller that produced them: [`stop_and_join`]
/// empties the queue once the poller has acknowledged, and [`receive`]
/// skips anything tagged with an older generation.
///
/// [`stop_and_join`]: InputQueue::stop_and_join
/// [`receive`]: InputQueue::receive
pub struct InputQueue<M: RawMutex, const N: usize> {
    link: PollerLink<M>,
    events: Channel<M, InputEvent, N>,
}

impl<M: RawMutex, const N: usize> Default for InputQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> InputQueue<M, N> {
    pub const fn new() -> Self {
        Self {
            link: PollerLink::new(),
            events: Channel::new(),
        }
    }

    /// Handshake polled by the live poller
    pub fn link(&self) -> &PollerLink<M> {
        &self.link
    }

    /// Arm for a new poller and return its generation
    pub fn begin(&self) -> u32 {
        self.link.begin()
    }

    /// Queue a press without waiting; hands the press back when full
    pub fn post(&self, generation: u32, button: LogicalButton) -> Result<(), LogicalButton> {
        self.events
            .try_send(InputEvent { generation, button })
            .map_err(|_| button)
    }

    /// Next press from the current poller generation
    pub async fn receive(&self) -> InputEvent {
        loop {
            let event = self.events.receive().await;
            if event.generation == self.link.generation() {
                return event;
            }
        }
    }

    /// Stop the live poller, wait for its acknowledgement, then discard
    /// whatever it queued
    ///
    /// Returns the stopped generation and the number of presses dropped.
    pub async fn stop_and_join(&self) -> (u32, usize) {
        let generation = self.link.stop_and_join().await;
        let mut stale = 0;
        while self.events.try_receive().is_ok() {
            stale += 1;
        }
        (generation, stale)
    }
}

/// Controller-side handle on the per-screen poller task
#[allow(async_fn_in_trait)]
pub trait PollerControl {
    /// Stop the live poller and wait until it has acknowledged
    ///
    /// Input events the outgoing poller queued are discarded before this
    /// returns.
    async fn stop_and_join(&mut self);

    /// Start the poller for `screen`, sampling `buttons`
    fn start(&mut self, screen: ScreenId, buttons: ButtonMask) -> Result<(), ResourceError>;
}
