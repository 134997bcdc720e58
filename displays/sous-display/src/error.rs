//! Display error types

/// Bus-level failure talking to the panel
///
/// Fatal: once a write has failed the transport refuses every further
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// SPI transaction failed
    Bus,
    /// An earlier transaction failed; the transport is halted
    Halted,
    /// Command or data sent before the hardware reset
    NotReset,
}

/// Rejected window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// An edge lies outside the panel
    OutOfBounds,
    /// End coordinate before start coordinate
    Inverted,
}

/// Failure while flushing one dirty region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlushError {
    Window(WindowError),
    Transport(TransportError),
    /// Pixel buffer holds fewer bytes than the window needs
    ShortBuffer,
}

impl From<WindowError> for FlushError {
    fn from(e: WindowError) -> Self {
        FlushError::Window(e)
    }
}

impl From<TransportError> for FlushError {
    fn from(e: TransportError) -> Self {
        FlushError::Transport(e)
    }
}
