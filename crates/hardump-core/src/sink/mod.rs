//! Output sinks for the finished document.
//!
//! The destination argument selects one: `-` dumps to the console, anything
//! else is a JSON file (zlib-compressed when it ends in `.zhar`).

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::JsonFileSink;

use std::fmt;
use std::path::PathBuf;

use crate::config::DumpConfig;
use crate::error::Result;
use crate::har::Har;

/// Destination argument that selects the console sink.
pub const CONSOLE_DESTINATION: &str = "-";

/// Extension that turns on zlib compression.
pub const ZHAR_EXTENSION: &str = "zhar";

/// Writes the whole document once.
pub trait HarSink {
    fn write(&mut self, har: &Har) -> Result<()>;
}

/// Where the document goes at shutdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    File(PathBuf),
}

impl Destination {
    pub fn parse(arg: &str) -> Self {
        if arg == CONSOLE_DESTINATION {
            Destination::Console
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }

    /// True for file destinations ending in `.zhar`.
    pub fn is_compressed(&self) -> bool {
        match self {
            Destination::Console => false,
            Destination::File(path) => path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(ZHAR_EXTENSION)),
        }
    }

    pub fn into_sink(self, cfg: &DumpConfig) -> Box<dyn HarSink + Send> {
        let compressed = self.is_compressed();
        match self {
            Destination::Console => Box::new(ConsoleSink::stdout()),
            Destination::File(path) if compressed => {
                Box::new(JsonFileSink::zlib(path, cfg.zhar_level()))
            }
            Destination::File(path) => Box::new(JsonFileSink::new(path)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Console => write!(f, "console"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}
