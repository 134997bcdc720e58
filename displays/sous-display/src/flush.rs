//! Flush adapter
//!
//! Bridges the renderer and the transport. The renderer lends a pixel
//! buffer for one dirty region; the adapter addresses the region, streams
//! exactly the region's bytes and only then hands the buffer back through
//! [`FlushReady`]. A failed flush never signals ready, so the renderer
//! cannot reuse a buffer the bus may still be reading.

use sous_core::config::DisplayConfig;
use sous_hal::{Delay, OutputPin, SpiBus};

use crate::error::{FlushError, TransportError};
use crate::transport::DisplayTransport;
use crate::window::{DisplayWindow, Panel};

/// Renderer-side completion hook
pub trait FlushReady {
    /// The pixel buffer may be reused
    fn flush_ready(&mut self);
}

/// Turns dirty regions into windowed pixel streams
pub struct FlushAdapter<SPI, DC, RST, D> {
    transport: DisplayTransport<SPI, DC, RST, D>,
    panel: Panel,
    madctl: u8,
}

impl<SPI, DC, RST, D> FlushAdapter<SPI, DC, RST, D>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    D: Delay,
{
    pub fn new(transport: DisplayTransport<SPI, DC, RST, D>, config: &DisplayConfig) -> Self {
        Self {
            transport,
            panel: Panel::from_config(config),
            madctl: config.madctl,
        }
    }

    /// Reset the panel and run its power-on sequence
    pub fn init(&mut self) -> Result<(), TransportError> {
        self.transport.reset()?;
        self.transport.init_sequence(self.panel, self.madctl)
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn transport(&self) -> &DisplayTransport<SPI, DC, RST, D> {
        &self.transport
    }

    /// Address a window and arm the panel for pixel data
    pub fn set_window(&mut self, window: &DisplayWindow) -> Result<(), TransportError> {
        self.transport.set_window(window)
    }

    /// Stream one region
    ///
    /// Sends exactly `window.byte_len()` bytes from the front of `pixels`
    /// (row-major, big-endian RGB565). `ready` is signalled once, after the
    /// last byte has been written.
    pub fn flush<R: FlushReady>(
        &mut self,
        window: &DisplayWindow,
        pixels: &[u8],
        ready: &mut R,
    ) -> Result<(), FlushError> {
        let len = window.byte_len();
        let Some(payload) = pixels.get(..len) else {
            return Err(FlushError::ShortBuffer);
        };
        self.transport.set_window(window)?;
        self.transport.send_data(payload)?;
        ready.flush_ready();
        Ok(())
    }

    /// Fill the whole panel with one color, a row at a time
    pub fn clear(&mut self, color: u16) -> Result<(), TransportError> {
        let full = self.panel.full();
        self.transport.set_window(&full)?;

        let mut row = [0u8; MAX_ROW_BYTES];
        let row_len = self.panel.row_bytes().min(MAX_ROW_BYTES);
        for px in row[..row_len].chunks_exact_mut(2) {
            px.copy_from_slice(&color.to_be_bytes());
        }
        for _ in 0..full.height() {
            self.transport.send_data(&row[..row_len])?;
        }
        Ok(())
    }
}

/// Widest row `clear` can fill in one write
const MAX_ROW_BYTES: usize = 480 * 2;
