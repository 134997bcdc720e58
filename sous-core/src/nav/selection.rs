//! Highlight and scroll state of the active screen

use crate::state::Step;

/// Highlighted index over the selectable items of a screen
///
/// Keeps `index < count` whenever `count > 0` and wraps in both
/// directions. An empty screen has nothing to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationState {
    index: usize,
    count: usize,
}

impl NavigationState {
    /// Start with the first item highlighted
    pub const fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    /// Move one item and return the new index
    pub fn step(&mut self, step: Step) -> usize {
        if self.count == 0 {
            return 0;
        }
        self.index = match step {
            Step::Forward => (self.index + 1) % self.count,
            Step::Backward => (self.index + self.count - 1) % self.count,
        };
        self.index
    }
}

/// Vertical scroll offset of a content screen
///
/// Moves in fixed steps and saturates at `0` and `max` instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollState {
    offset: i32,
    max: i32,
    step: i32,
}

impl ScrollState {
    pub fn new(max: i32, step: i32) -> Self {
        Self {
            offset: 0,
            max: max.max(0),
            step: step.max(1),
        }
    }

    pub const fn offset(&self) -> i32 {
        self.offset
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Move one step and return the applied delta (0 at either end)
    pub fn step(&mut self, step: Step) -> i32 {
        let target = match step {
            Step::Forward => (self.offset + self.step).min(self.max),
            Step::Backward => (self.offset - self.step).max(0),
        };
        let delta = target - self.offset;
        self.offset = target;
        delta
    }
}
