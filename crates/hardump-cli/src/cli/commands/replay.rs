//! `hardump replay <flows> <dest>` – run the recorder over a flow capture.

use anyhow::Result;
use hardump_core::config::DumpConfig;
use hardump_core::replay;
use hardump_core::HostInfo;
use std::path::Path;

pub fn run_replay(flows: &Path, args: &[String], cfg: DumpConfig) -> Result<()> {
    let captured = replay::read_flows(flows)?;
    tracing::info!(flows = captured.len(), capture = %flows.display(), "replaying capture");
    let host = HostInfo::new("hardump", env!("CARGO_PKG_VERSION"));
    let written = replay::replay(args, &captured, cfg, &host)?;
    eprintln!("Recorded {written} HAR entries from {}", flows.display());
    Ok(())
}
