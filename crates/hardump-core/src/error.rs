//! Error type for the recorder lifecycle.
//!
//! The hooks have two terminal failure points: a bad destination argument at
//! startup and a failed write at shutdown.

use std::path::PathBuf;
use thiserror::Error;

/// Usage line reported when the hook is given the wrong argument list.
pub const USAGE: &str = "usage: har_dump <filename> \
    (- will output to stdout, filenames ending with .zhar will result in compressed har)";

#[derive(Debug, Error)]
pub enum HarDumpError {
    /// `start` was not given exactly one destination argument.
    #[error("expected exactly one destination argument, got {got}; {}", USAGE)]
    Usage { got: usize },

    /// The document could not be serialized.
    #[error("serialize HAR: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The destination could not be written. The document is lost.
    #[error("write HAR to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The console channel rejected the dump.
    #[error("write HAR dump to console: {0}")]
    Console(#[source] std::io::Error),
}

pub type Result<T, E = HarDumpError> = std::result::Result<T, E>;
