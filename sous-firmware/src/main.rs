//! Sous - Kitchen Appliance Controller Firmware
//!
//! Main firmware binary for RP2040-based kitchen controllers: a recipe
//! browser, a kitchen scale and a countdown timer on a small ST7735 panel
//! driven by four buttons.
//!
//! Named after the sous-chef, the second pair of hands in the kitchen.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sous_core::config::{decode_config, decode_recipes, DeviceConfig};
use sous_core::recipe::RecipeBook;
use sous_display::{DisplayTransport, FlushAdapter};
use sous_drivers::buzzer::GpioBuzzer;
use sous_drivers::sensor::Hx711;
use sous_hal::spi::SpiConfig;
use sous_hal_rp2040::spi::rp_config;
use sous_hal_rp2040::{RpDelay, RpInput, RpOutput, RpSpi};

use crate::board::{ButtonBank, PanelFlush};

mod board;
mod channels;
mod tasks;

/// Device configuration compiled from device.toml by build.rs
static DEVICE_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/device.bin"));

/// Recipe document compiled from recipes.json by build.rs
static RECIPE_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/recipes.bin"));

// Shared with tasks for the program duration
static CONFIG: StaticCell<DeviceConfig> = StaticCell::new();
static BOOK: StaticCell<RecipeBook> = StaticCell::new();
static BUTTONS: StaticCell<ButtonBank> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sous firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config: &'static DeviceConfig = CONFIG.init(load_config());
    let book: &'static RecipeBook = BOOK.init_with(load_recipes);

    // Panel on SPI0, chip select held low for the panel's lifetime
    let spi_config = rp_config(&SpiConfig::panel(config.display.spi_hz));
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let _cs = Output::new(p.PIN_17, Level::Low);
    let dc = RpOutput::new(Output::new(p.PIN_16, Level::Low));
    let rst = RpOutput::new(Output::new(p.PIN_20, Level::High));
    let mut backlight = Output::new(p.PIN_21, Level::Low);

    let transport = DisplayTransport::new(
        RpSpi::new(spi),
        dc,
        rst,
        RpDelay,
        config.display.max_chunk as usize,
    );
    let mut panel: PanelFlush = FlushAdapter::new(transport, &config.display);

    if let Err(e) = panel.init() {
        error!("Display init failed: {:?}", e);
        halt().await;
    }
    if let Err(e) = panel.clear(0x0000) {
        error!("Display clear failed: {:?}", e);
        halt().await;
    }
    backlight.set_high();
    info!(
        "Display initialized ({}x{}, {} Hz)",
        config.display.width, config.display.height, config.display.spi_hz
    );

    // Active-low buttons with internal pull-ups
    let buttons: &'static ButtonBank = BUTTONS.init(ButtonBank {
        down: RpInput::new(Input::new(p.PIN_10, Pull::Up)),
        up: RpInput::new(Input::new(p.PIN_11, Pull::Up)),
        select: RpInput::new(Input::new(p.PIN_12, Pull::Up)),
        back: RpInput::new(Input::new(p.PIN_13, Pull::Up)),
    });

    let buzzer = GpioBuzzer::new(
        RpOutput::new(Output::new(p.PIN_22, Level::Low)),
        &config.timer,
    );

    let scale = Hx711::new(
        RpInput::new(Input::new(p.PIN_14, Pull::None)),
        RpOutput::new(Output::new(p.PIN_15, Level::Low)),
        RpDelay,
        &config.scale,
    );

    info!("Buttons, buzzer and scale initialized");

    // Spawn tasks
    spawner.spawn(tasks::countdown_task()).unwrap();
    spawner.spawn(tasks::weight_task(scale, config.scale)).unwrap();
    spawner
        .spawn(tasks::ui_task(spawner, panel, buzzer, buttons, book, config))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task keeps the chip-select and backlight pins alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Decode the embedded configuration, falling back to defaults
fn load_config() -> DeviceConfig {
    match decode_config(DEVICE_BLOB) {
        Ok(config) => {
            info!("Loaded embedded configuration");
            config
        }
        Err(e) => {
            error!("Failed to decode embedded config: {:?}", e);
            error!("Using default configuration");
            DeviceConfig::default()
        }
    }
}

/// Decode the embedded recipe document
///
/// A broken document leaves the book empty; the recipe screen then
/// reports the fault instead of opening.
fn load_recipes() -> RecipeBook {
    match decode_recipes(RECIPE_BLOB) {
        Ok(book) => {
            info!("Loaded {} recipes", book.len());
            book
        }
        Err(e) => {
            error!("Failed to decode embedded recipes: {:?}", e);
            RecipeBook::empty()
        }
    }
}

/// Stop booting after a fatal display error
async fn halt() -> ! {
    loop {
        embassy_time::Timer::after_secs(60).await;
    }
}
