//! Per-screen input poller task
//!
//! At most one instance is alive. The UI task spawns it after building a
//! screen and stops it through [`INPUT_QUEUE`] before tearing the screen
//! down; the task never exits any other way.

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};

use sous_core::config::InputConfig;
use sous_core::error::ResourceError;
use sous_core::input::{EventSink, InputPoller, PollClock};
use sous_core::lifecycle::PollerControl;
use sous_core::state::{ButtonMask, LogicalButton, ScreenId};

use crate::board::ButtonBank;
use crate::channels::INPUT_QUEUE;

/// Embassy time driver as the poller's clock
pub struct EmbassyClock;

impl PollClock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    async fn sleep_ms(&mut self, ms: u32) {
        Timer::after_millis(ms as u64).await;
    }
}

/// Posts presses to the UI task without waiting
struct QueueSink {
    generation: u32,
}

impl EventSink for QueueSink {
    fn emit(&mut self, button: LogicalButton) {
        if let Err(dropped) = INPUT_QUEUE.post(self.generation, button) {
            warn!("Input queue full, dropped {:?}", dropped);
        }
    }
}

/// Poller task - samples the buttons watched by `screen`
#[embassy_executor::task(pool_size = 1)]
pub async fn poller_task(
    screen: ScreenId,
    buttons: ButtonMask,
    pins: &'static ButtonBank,
    config: InputConfig,
) {
    let generation = INPUT_QUEUE.link().generation();
    debug!("Poller {} started for {:?}", generation, screen);

    let mut poller = InputPoller::new(buttons, &config);
    let mut sink = QueueSink { generation };
    poller.run(INPUT_QUEUE.link(), pins, &mut EmbassyClock, &mut sink).await;

    debug!("Poller {} stopped", generation);
}

/// Spawns and joins [`poller_task`] on behalf of the controller
pub struct SpawnedPoller {
    spawner: Spawner,
    pins: &'static ButtonBank,
    config: InputConfig,
}

impl SpawnedPoller {
    pub fn new(spawner: Spawner, pins: &'static ButtonBank, config: InputConfig) -> Self {
        Self {
            spawner,
            pins,
            config,
        }
    }
}

impl PollerControl for SpawnedPoller {
    async fn stop_and_join(&mut self) {
        let (generation, stale) = INPUT_QUEUE.stop_and_join().await;
        if stale > 0 {
            debug!("Discarded {} presses from poller {}", stale, generation);
        }
    }

    fn start(&mut self, screen: ScreenId, buttons: ButtonMask) -> Result<(), ResourceError> {
        INPUT_QUEUE.begin();
        self.spawner
            .spawn(poller_task(screen, buttons, self.pins, self.config))
            .map_err(|_| {
                error!("Poller spawn failed for {:?}", screen);
                ResourceError::TaskSpawn
            })
    }
}
