//! The recorder lifecycle: `start`, `response`, `done`.
//!
//! [`HarDump`] owns the document. The host creates it with
//! [`HarDump::start`], feeds each completed flow to [`HarDump::response`]
//! and finally calls [`HarDump::done`], which consumes it and writes the
//! document out.

mod shared;

pub use shared::SharedHarDump;

use chrono::Utc;

use crate::config::DumpConfig;
use crate::error::{HarDumpError, Result};
use crate::flow::Flow;
use crate::har::{build_entry, Creator, EntryOptions, Har};
use crate::sink::{Destination, HarSink};

/// Name and version of the proxy the recorder is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub name: String,
    pub version: String,
}

impl HostInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Accumulates one HAR entry per completed flow.
pub struct HarDump {
    har: Har,
    config: DumpConfig,
    destination: Destination,
    sink: Box<dyn HarSink + Send>,
}

impl HarDump {
    /// Validates the hook arguments (exactly one destination) and creates an
    /// empty document. Fails without side effects on a bad argument count.
    pub fn start(args: &[String], config: DumpConfig, host: &HostInfo) -> Result<Self> {
        let [dest] = args else {
            return Err(HarDumpError::Usage { got: args.len() });
        };
        let destination = Destination::parse(dest);
        let sink = destination.clone().into_sink(&config);
        Ok(Self::with_sink(destination, sink, config, host))
    }

    /// Creates a started recorder writing to a caller-provided sink.
    pub fn with_sink(
        destination: Destination,
        sink: Box<dyn HarSink + Send>,
        config: DumpConfig,
        host: &HostInfo,
    ) -> Self {
        let creator = Creator {
            name: config
                .creator_name
                .clone()
                .unwrap_or_else(|| format!("{} har_dump", host.name)),
            version: config.creator_version.clone(),
            comment: format!("{} version {}", host.name, host.version),
        };
        tracing::info!(destination = %destination, "HAR recording started");
        Self {
            har: Har::new(creator),
            config,
            destination,
            sink,
        }
    }

    /// Appends the entry for one completed flow.
    pub fn response(&mut self, flow: &Flow) {
        let opts = EntryOptions {
            empty_lists: self.config.empty_lists,
            now: Utc::now(),
        };
        let entry = build_entry(flow, &opts);
        tracing::debug!(
            method = %entry.request.method,
            url = %entry.request.url,
            status = entry.response.status,
            time_ms = entry.time,
            "recorded HAR entry"
        );
        self.har.log.entries.push(entry);
    }

    /// Writes the document to the destination. Returns the number of entries written.
    pub fn done(mut self) -> Result<usize> {
        let count = self.har.log.entries.len();
        self.sink.write(&self.har)?;
        tracing::info!(entries = count, destination = %self.destination, "HAR recording written");
        Ok(count)
    }

    pub fn har(&self) -> &Har {
        &self.har
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn len(&self) -> usize {
        self.har.log.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.har.log.entries.is_empty()
    }
}
