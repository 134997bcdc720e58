//! Load-cell sampling task
//!
//! Idles until the scale screen is shown, then posts one averaged reading
//! per `interval_ms`.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use sous_core::config::ScaleConfig;
use sous_core::traits::WeightSensor;

use crate::board::BoardScale;
use crate::channels::{SCALE_ACTIVE, WEIGHT_READING};

/// Weight task - HX711 sampling while the scale screen is active
#[embassy_executor::task]
pub async fn weight_task(mut scale: BoardScale, config: ScaleConfig) {
    info!("Weight task started");

    match scale.tare().await {
        Ok(()) => info!("Scale tared at {} counts", scale.offset()),
        Err(e) => warn!("Tare failed: {:?}", e),
    }

    let interval = Duration::from_millis(config.interval_ms as u64);

    loop {
        // Park until the scale screen is shown
        while !SCALE_ACTIVE.wait().await {}
        debug!("Scale sampling started");

        let mut ticker = Ticker::every(interval);
        loop {
            match select(ticker.next(), SCALE_ACTIVE.wait()).await {
                Either::First(()) => {
                    let reading = scale.read_grams().await;
                    match reading {
                        Ok(grams) => debug!("Weight: {} g", grams),
                        Err(e) => warn!("Weight read failed: {:?}", e),
                    }
                    WEIGHT_READING.signal(reading);
                }
                Either::Second(true) => {}
                Either::Second(false) => break,
            }
        }

        debug!("Scale sampling stopped");
    }
}
