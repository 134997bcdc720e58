//! Navigation transition table
//!
//! Every button press on every screen resolves to one [`Route`]. The
//! controller executes the route; this module only decides it.

use super::events::LogicalButton;
use super::screen::{ScreenId, ScreenKind};

/// Direction of a highlight or scroll move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Forward,
    Backward,
}

/// Timer screen actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerAction {
    /// Add one step to the setpoint
    Increase,
    /// Remove one step from the setpoint
    Decrease,
    /// Start or stop the countdown
    Toggle,
}

/// What a button press on a screen means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Route {
    /// Press has no effect on this screen
    Ignore,
    /// Move the highlight, wrapping at both ends
    Highlight(Step),
    /// Scroll the viewport, saturating at both ends
    Scroll(Step),
    /// Commit the highlighted item
    Commit,
    /// Transition to another screen
    Goto(ScreenId),
    /// Adjust or run the countdown
    Timer(TimerAction),
}

/// Resolve a press on `screen` to a route
pub fn route(screen: ScreenId, button: LogicalButton) -> Route {
    use LogicalButton::*;

    match (screen.kind(), button) {
        // Back always goes exactly one hop up
        (_, Back) => match screen.parent() {
            Some(parent) => Route::Goto(parent),
            None => Route::Ignore,
        },

        // Selectable screens
        (_, Next) if screen.is_selectable() => Route::Highlight(Step::Forward),
        (_, Prev) if screen.is_selectable() => Route::Highlight(Step::Backward),
        (_, Select) if screen.is_selectable() => Route::Commit,

        // Scrollable content screens
        (ScreenKind::Scroll, Next) => Route::Scroll(Step::Forward),
        (ScreenKind::Scroll, Prev) => Route::Scroll(Step::Backward),

        // Timer: Up raises the setpoint, Down lowers it
        (ScreenKind::Timer, Prev) => Route::Timer(TimerAction::Increase),
        (ScreenKind::Timer, Next) => Route::Timer(TimerAction::Decrease),
        (ScreenKind::Timer, Select) => Route::Timer(TimerAction::Toggle),

        // Default: press ignored
        _ => Route::Ignore,
    }
}
