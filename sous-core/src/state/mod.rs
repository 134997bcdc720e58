//! Screen navigation state machine
//!
//! Screen identities, the fixed per-screen descriptor table and the pure
//! routing function that maps a logical button press on a screen to an
//! action. Nothing here touches widgets or tasks.

pub mod events;
pub mod machine;
pub mod screen;

pub use events::LogicalButton;
pub use machine::{route, Route, Step, TimerAction};
pub use screen::{ButtonMask, MenuEntry, ScreenDescriptor, ScreenId, ScreenKind};
