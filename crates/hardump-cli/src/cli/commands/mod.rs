//! CLI command handlers.

mod config;
mod replay;

pub use config::run_config;
pub use replay::run_replay;
