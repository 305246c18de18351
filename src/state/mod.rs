//! Application state module

mod app_state;
mod forms;
mod notifier;
mod submission;
mod tracker;

pub use app_state::*;
pub use forms::*;
pub use notifier::*;
pub use submission::*;
