//! ST7735 command set and power-on sequence

use sous_hal::{Delay, OutputPin, SpiBus};

use crate::error::TransportError;
use crate::transport::DisplayTransport;
use crate::window::{DisplayWindow, Panel};

/// ST7735 opcodes
pub mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
}

/// 16 bits per pixel
pub const COLMOD_RGB565: u8 = 0x05;

/// Parameters carried by an init step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Params {
    None,
    Byte(u8),
    /// Configured memory-access control byte
    Madctl,
    /// Address the full panel (CASET, RASET, RAMWR)
    FullWindow,
}

/// One power-on step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    pub op: u8,
    pub params: Params,
    pub settle_ms: u32,
}

impl InitStep {
    const fn new(op: u8, params: Params, settle_ms: u32) -> Self {
        Self {
            op,
            params,
            settle_ms,
        }
    }
}

/// Power-on sequence. Order is fixed by the controller datasheet.
pub const INIT_SEQUENCE: [InitStep; 7] = [
    InitStep::new(cmd::SWRESET, Params::None, 150),
    InitStep::new(cmd::SLPOUT, Params::None, 500),
    InitStep::new(cmd::COLMOD, Params::Byte(COLMOD_RGB565), 10),
    InitStep::new(cmd::MADCTL, Params::Madctl, 10),
    InitStep::new(cmd::CASET, Params::FullWindow, 10),
    InitStep::new(cmd::NORON, Params::None, 10),
    InitStep::new(cmd::DISPON, Params::None, 100),
];

impl<SPI, DC, RST, D> DisplayTransport<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    /// Run the power-on sequence
    ///
    /// Requires a prior [`reset`](Self::reset).
    pub fn init_sequence(&mut self, panel: Panel, madctl: u8) -> Result<(), TransportError> {
        for step in INIT_SEQUENCE.iter() {
            match step.params {
                Params::None => self.send_command(step.op)?,
                Params::Byte(b) => self.command_with(step.op, &[b])?,
                Params::Madctl => self.command_with(step.op, &[madctl])?,
                Params::FullWindow => self.set_window(&panel.full())?,
            }
            self.settle(step.settle_ms);
        }
        Ok(())
    }

    /// Address a window and arm the panel for a pixel stream
    pub fn set_window(&mut self, window: &DisplayWindow) -> Result<(), TransportError> {
        self.command_with(cmd::CASET, &window.column_bytes())?;
        self.command_with(cmd::RASET, &window.row_bytes())?;
        self.send_command(cmd::RAMWR)
    }
}
