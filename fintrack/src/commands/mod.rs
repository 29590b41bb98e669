pub mod executor;
pub mod handlers;
pub mod submission;

pub use crate::events::AppCommand;
