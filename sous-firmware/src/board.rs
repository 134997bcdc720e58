//! Reference board wiring
//!
//! RP2040 with a 1.8" ST7735 panel on SPI0, four active-low buttons with
//! internal pull-ups, an HX711 load-cell amplifier and an active buzzer.
//!
//! | Signal        | GPIO |
//! |---------------|------|
//! | Panel SCK     | 18   |
//! | Panel MOSI    | 19   |
//! | Panel CS      | 17   |
//! | Panel D/C     | 16   |
//! | Panel RST     | 20   |
//! | Panel BL      | 21   |
//! | Button Down   | 10   |
//! | Button Up     | 11   |
//! | Button Select | 12   |
//! | Button Back   | 13   |
//! | HX711 DOUT    | 14   |
//! | HX711 SCK     | 15   |
//! | Buzzer        | 22   |

use embassy_rp::peripherals::SPI0;

use sous_core::input::{ButtonPins, PhysicalButton};
use sous_display::FlushAdapter;
use sous_drivers::buzzer::GpioBuzzer;
use sous_drivers::sensor::Hx711;
use sous_hal::ActiveLowButton;
use sous_hal_rp2040::{RpDelay, RpInput, RpOutput, RpSpi};

/// Panel flush path
pub type PanelFlush = FlushAdapter<RpSpi<'static, SPI0>, RpOutput<'static>, RpOutput<'static>, RpDelay>;

/// Alarm output
pub type BoardBuzzer = GpioBuzzer<RpOutput<'static>>;

/// Load cell
pub type BoardScale = Hx711<RpInput<'static>, RpOutput<'static>, RpDelay>;

/// The four navigation buttons
pub struct ButtonBank {
    pub down: RpInput<'static>,
    pub up: RpInput<'static>,
    pub select: RpInput<'static>,
    pub back: RpInput<'static>,
}

impl ButtonPins for ButtonBank {
    fn is_pressed(&self, button: PhysicalButton) -> bool {
        let pin = match button {
            PhysicalButton::Down => &self.down,
            PhysicalButton::Up => &self.up,
            PhysicalButton::Select => &self.select,
            PhysicalButton::Back => &self.back,
        };
        pin.is_pressed()
    }
}
