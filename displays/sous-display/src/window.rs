//! Panel geometry and address windows

use sous_core::config::DisplayConfig;

use crate::error::WindowError;

/// Bytes per RGB565 pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Default panel width in pixels
pub const PANEL_WIDTH: u16 = 128;

/// Default panel height in pixels
pub const PANEL_HEIGHT: u16 = 160;

/// Panel dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Panel {
    pub width: u16,
    pub height: u16,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        }
    }
}

impl Panel {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Window covering the whole panel
    pub const fn full(&self) -> DisplayWindow {
        DisplayWindow {
            x0: 0,
            y0: 0,
            x1: self.width.saturating_sub(1),
            y1: self.height.saturating_sub(1),
        }
    }

    /// Bytes in one full-width row
    pub const fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }
}

/// Inclusive rectangle in panel coordinates
///
/// Always satisfies `x0 <= x1 < width` and `y0 <= y1 < height` for the
/// panel it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayWindow {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
}

impl DisplayWindow {
    /// Validate a window against the panel
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16, panel: Panel) -> Result<Self, WindowError> {
        if x1 >= panel.width || y1 >= panel.height {
            return Err(WindowError::OutOfBounds);
        }
        if x0 > x1 || y0 > y1 {
            return Err(WindowError::Inverted);
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Full-width band of `rows` rows starting at `y0`, clipped to the panel
    pub fn band(y0: u16, rows: u16, panel: Panel) -> Result<Self, WindowError> {
        if rows == 0 {
            return Err(WindowError::Inverted);
        }
        let y1 = y0
            .saturating_add(rows - 1)
            .min(panel.height.saturating_sub(1));
        Self::new(0, y0, panel.width.saturating_sub(1), y1, panel)
    }

    pub const fn x0(&self) -> u16 {
        self.x0
    }

    pub const fn y0(&self) -> u16 {
        self.y0
    }

    pub const fn x1(&self) -> u16 {
        self.x1
    }

    pub const fn y1(&self) -> u16 {
        self.y1
    }

    pub const fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    pub const fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }

    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Pixel payload size for this window
    pub const fn byte_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    /// Column-address payload: start and end, big-endian
    pub const fn column_bytes(&self) -> [u8; 4] {
        let [a, b] = self.x0.to_be_bytes();
        let [c, d] = self.x1.to_be_bytes();
        [a, b, c, d]
    }

    /// Row-address payload: start and end, big-endian
    pub const fn row_bytes(&self) -> [u8; 4] {
        let [a, b] = self.y0.to_be_bytes();
        let [c, d] = self.y1.to_be_bytes();
        [a, b, c, d]
    }
}
