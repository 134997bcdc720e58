//! Events that drive navigation

/// Debounced, discrete press reported once per press cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalButton {
    /// Down button: move the highlight forward or scroll down
    Next,
    /// Up button: move the highlight back or scroll up
    Prev,
    /// Commit the highlighted item
    Select,
    /// Return to the parent screen
    Back,
}

impl LogicalButton {
    /// All logical buttons in poller evaluation order
    pub const ALL: [LogicalButton; 4] = [
        LogicalButton::Next,
        LogicalButton::Prev,
        LogicalButton::Select,
        LogicalButton::Back,
    ];

    /// Bit used for this button in a [`super::ButtonMask`]
    pub const fn bit(self) -> u8 {
        match self {
            LogicalButton::Next => 1 << 0,
            LogicalButton::Prev => 1 << 1,
            LogicalButton::Select => 1 << 2,
            LogicalButton::Back => 1 << 3,
        }
    }
}
