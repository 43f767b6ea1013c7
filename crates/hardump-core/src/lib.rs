pub mod config;
pub mod logging;

pub mod dump;
pub mod error;
pub mod flow;
pub mod har;
pub mod replay;
pub mod sink;

pub use dump::{HarDump, HostInfo, SharedHarDump};
pub use error::HarDumpError;
