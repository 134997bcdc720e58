//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Every widget mutation happens in the UI task; the other tasks only post
//! here.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use sous_core::lifecycle::InputQueue;
use sous_core::traits::SensorError;

/// Queue capacity for confirmed presses
const INPUT_QUEUE_SIZE: usize = 8;

/// Presses from the live poller to the UI task, plus the stop/acknowledge
/// handshake with that poller
pub static INPUT_QUEUE: InputQueue<CriticalSectionRawMutex, INPUT_QUEUE_SIZE> = InputQueue::new();

/// One-second countdown tick
pub static TIMER_TICK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Latest weight reading (updated by weight task)
pub static WEIGHT_READING: Signal<CriticalSectionRawMutex, Result<f32, SensorError>> =
    Signal::new();

/// Whether the scale screen is showing (updated by UI task)
pub static SCALE_ACTIVE: Signal<CriticalSectionRawMutex, bool> = Signal::new();
