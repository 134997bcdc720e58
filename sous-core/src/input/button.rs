//! Physical buttons and their logical meaning

use crate::state::LogicalButton;

/// One of the four buttons on the front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhysicalButton {
    Down,
    Up,
    Select,
    Back,
}

/// Order buttons are evaluated within one sampling iteration
///
/// Back is last so that Back pressed together with another button still
/// leaves the screen on that iteration.
pub const EVALUATION_ORDER: [PhysicalButton; 4] = [
    PhysicalButton::Down,
    PhysicalButton::Up,
    PhysicalButton::Select,
    PhysicalButton::Back,
];

impl PhysicalButton {
    pub const fn logical(self) -> LogicalButton {
        match self {
            PhysicalButton::Down => LogicalButton::Next,
            PhysicalButton::Up => LogicalButton::Prev,
            PhysicalButton::Select => LogicalButton::Select,
            PhysicalButton::Back => LogicalButton::Back,
        }
    }

    /// Slot in per-button state arrays
    pub const fn index(self) -> usize {
        match self {
            PhysicalButton::Down => 0,
            PhysicalButton::Up => 1,
            PhysicalButton::Select => 2,
            PhysicalButton::Back => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_order_matches_logical_order() {
        let logical = EVALUATION_ORDER.map(PhysicalButton::logical);
        assert_eq!(logical, LogicalButton::ALL);
        assert_eq!(EVALUATION_ORDER.last(), Some(&PhysicalButton::Back));
    }

    #[test]
    fn test_indices_are_distinct() {
        for (i, button) in EVALUATION_ORDER.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }
}
