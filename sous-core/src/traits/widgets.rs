//! Widget engine trait
//!
//! The renderer that owns widgets, lays them out and produces dirty
//! regions for the flush adapter. It is not reentrant: every call must
//! come from the single UI context.

use crate::error::ResourceError;
use crate::state::ScreenKind;

/// Identifies the live screen container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenHandle(pub u16);

/// Identifies a widget within the live screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WidgetId(pub u16);

/// Background treatment of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tone {
    /// White
    #[default]
    Plain,
    /// Red: highlighted item, or a running timer's Stop button
    Highlight,
    /// Green: the timer's Start button
    Go,
}

/// Retained widget tree holding at most one screen
pub trait WidgetEngine {
    /// Create the screen container. Fails with `ScreenBusy` if one is live.
    fn create_screen(&mut self, kind: ScreenKind) -> Result<ScreenHandle, ResourceError>;

    /// Delete the screen and every widget in it
    fn destroy_screen(&mut self, screen: ScreenHandle) -> Result<(), ResourceError>;

    /// Create a labeled, clickable button
    fn create_button(&mut self, screen: ScreenHandle, text: &str)
        -> Result<WidgetId, ResourceError>;

    /// Create a text label
    fn create_label(&mut self, screen: ScreenHandle, text: &str) -> Result<WidgetId, ResourceError>;

    /// Change a button's background
    fn set_tone(&mut self, widget: WidgetId, tone: Tone);

    /// Replace a label's or button's text
    fn set_text(&mut self, widget: WidgetId, text: &str) -> Result<(), ResourceError>;

    /// Current text of a widget
    fn text(&self, widget: WidgetId) -> Option<&str>;

    /// Scroll the screen's content by `dy` pixels (positive scrolls down)
    fn scroll_by(&mut self, screen: ScreenHandle, dy: i32);

    /// Current vertical scroll position
    fn scroll_y(&self, screen: ScreenHandle) -> i32;

    /// Largest scroll position the content allows
    fn max_scroll(&self, screen: ScreenHandle) -> i32;

    /// Overlay a short fault notice on the screen
    fn show_notice(&mut self, screen: ScreenHandle, text: &str) -> Result<(), ResourceError>;

    /// Mark the whole panel dirty
    fn invalidate(&mut self);
}
