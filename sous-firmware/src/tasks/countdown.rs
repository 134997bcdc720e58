//! Countdown tick task
//!
//! Drives the timer at 1 Hz whether or not the timer screen is showing.
//! The UI task decides what a tick means.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::TIMER_TICK;

/// Countdown resolution
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown task - signals one tick per second
#[embassy_executor::task]
pub async fn countdown_task() {
    info!("Countdown task started");

    let mut ticker = Ticker::every(TICK_INTERVAL);

    loop {
        ticker.next().await;
        TIMER_TICK.signal(());
    }
}
