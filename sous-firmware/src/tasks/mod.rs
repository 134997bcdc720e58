//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod countdown;
pub mod poller;
pub mod ui;
pub mod weight;

pub use countdown::countdown_task;
pub use poller::{poller_task, SpawnedPoller};
pub use ui::ui_task;
pub use weight::weight_task;
