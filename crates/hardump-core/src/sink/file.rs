//! JSON file output, optionally zlib-compressed.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{HarDumpError, Result};
use crate::har::Har;

use super::HarSink;

/// Writes the document as 2-space indented JSON, replacing any existing file.
pub struct JsonFileSink {
    path: PathBuf,
    zlib_level: Option<u32>,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            zlib_level: None,
        }
    }

    /// Same JSON, zlib-compressed at `level` (0-9).
    pub fn zlib(path: impl Into<PathBuf>, level: u32) -> Self {
        Self {
            path: path.into(),
            zlib_level: Some(level.min(9)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> HarDumpError {
        HarDumpError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl HarSink for JsonFileSink {
    fn write(&mut self, har: &Har) -> Result<()> {
        let mut raw = serde_json::to_vec_pretty(har)?;
        if let Some(level) = self.zlib_level {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
            encoder.write_all(&raw).map_err(|e| self.write_error(e))?;
            raw = encoder.finish().map_err(|e| self.write_error(e))?;
        }
        std::fs::write(&self.path, &raw).map_err(|e| self.write_error(e))?;
        tracing::debug!(path = %self.path.display(), bytes = raw.len(), "HAR written");
        Ok(())
    }
}
