//! UI task
//!
//! The single context that owns the widget tree and the panel. Button
//! presses, timer ticks and weight readings are marshalled here through
//! channels; the refresh ticker draws whatever changed.

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{select4, Either4};
use embassy_time::{Duration, Ticker, Timer};

use sous_core::config::DeviceConfig;
use sous_core::error::ResourceError;
use sous_core::lifecycle::InputEvent;
use sous_core::nav::{Controller, Outcome};
use sous_core::recipe::RecipeBook;
use sous_core::state::ScreenId;
use sous_core::timer::{format_mmss, Tick};
use sous_display::WidgetTree;

use crate::board::{BoardBuzzer, ButtonBank, PanelFlush};
use crate::channels::{INPUT_QUEUE, SCALE_ACTIVE, TIMER_TICK, WEIGHT_READING};
use crate::tasks::SpawnedPoller;

type Ui = Controller<'static, WidgetTree, BoardBuzzer>;

/// UI task - navigation, widget updates and panel refresh
#[embassy_executor::task]
pub async fn ui_task(
    spawner: Spawner,
    mut panel: PanelFlush,
    buzzer: BoardBuzzer,
    pins: &'static ButtonBank,
    book: &'static RecipeBook,
    config: &'static DeviceConfig,
) {
    info!("UI task started");

    let tree = WidgetTree::new(&config.display);
    let mut ui: Ui = Controller::new(tree, buzzer, book, config);
    let mut poller = SpawnedPoller::new(spawner, pins, config.input);

    if let Err(e) = ui.start(&mut poller).await {
        error!("Home screen failed: {:?}", e);
        halt().await;
    }
    info!("Home screen shown");

    let mut refresh = Ticker::every(Duration::from_millis(config.ui.refresh_ms as u64));

    loop {
        let result = match select4(
            INPUT_QUEUE.receive(),
            TIMER_TICK.wait(),
            WEIGHT_READING.wait(),
            refresh.next(),
        )
        .await
        {
            Either4::First(event) => on_input(&mut ui, &mut poller, event).await,
            Either4::Second(()) => on_tick(&mut ui),
            Either4::Third(reading) => ui.show_weight(reading),
            Either4::Fourth(()) => {
                if let Err(e) = ui.engine_mut().render(&mut panel) {
                    error!("Display transport failed: {:?}", e);
                    halt().await;
                }
                Ok(())
            }
        };

        if let Err(e) = result {
            error!("UI resource failure: {:?}", e);
            halt().await;
        }
    }
}

async fn on_input(ui: &mut Ui, poller: &mut SpawnedPoller, event: InputEvent) -> Result<(), ResourceError> {
    debug!("Button: {:?} (poller {})", event.button, event.generation);

    let was_running = ui.timer().is_running();

    match ui.handle(event.button, poller).await? {
        Outcome::Stayed => {}
        Outcome::Moved { from, to } => {
            info!("{:?} -> {:?}", from, to);
            if from == ScreenId::Scale || to == ScreenId::Scale {
                SCALE_ACTIVE.signal(to == ScreenId::Scale);
            }
        }
        Outcome::Faulted { target, error } => {
            warn!("Cannot open {:?}: {:?}", target, error);
        }
        Outcome::Silenced => info!("Alarm silenced"),
    }

    let timer = ui.timer();
    match (was_running, timer.is_running()) {
        (false, true) => info!("Timer started at {}", format_mmss(timer.remaining_s()).as_str()),
        (true, false) => info!("Timer stopped"),
        _ => {}
    }

    Ok(())
}

fn on_tick(ui: &mut Ui) -> Result<(), ResourceError> {
    if ui.tick_timer()? == Tick::Expired {
        info!("Timer expired");
    }
    Ok(())
}

/// Park the UI after a fatal error; the other tasks keep running
async fn halt() -> ! {
    loop {
        Timer::after_secs(60).await;
    }
}
