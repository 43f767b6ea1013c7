//! Replay host: drives the recorder from a JSON-lines capture of flows.
//!
//! Each non-blank line is one [`Flow`]. Flows are fed to the recorder in
//! file order between `start` and `done`, the way a live proxy would.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::DumpConfig;
use crate::dump::{HarDump, HostInfo};
use crate::flow::Flow;

/// Parses a JSON-lines capture. Blank lines are skipped.
pub fn parse_flows<R: BufRead>(reader: R) -> Result<Vec<Flow>> {
    let mut flows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read capture line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let flow: Flow = serde_json::from_str(&line)
            .with_context(|| format!("parse flow on capture line {}", idx + 1))?;
        flows.push(flow);
    }
    Ok(flows)
}

pub fn read_flows(path: &Path) -> Result<Vec<Flow>> {
    let file = File::open(path).with_context(|| format!("open capture: {}", path.display()))?;
    parse_flows(BufReader::new(file)).with_context(|| format!("capture: {}", path.display()))
}

/// Runs the full lifecycle over `flows` and returns the number of entries written.
pub fn replay(args: &[String], flows: &[Flow], config: DumpConfig, host: &HostInfo) -> Result<usize> {
    let mut dump = HarDump::start(args, config, host)?;
    for flow in flows {
        dump.response(flow);
    }
    let written = dump.done()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = r#"{"request":{"timestamp_start":1.0,"method":"GET","url":"http://h/","http_version":"HTTP/1.1"},"response":{"status_code":200,"http_version":"HTTP/1.1"}}"#;

    #[test]
    fn parse_skips_blank_lines() {
        let input = format!("{LINE}\n\n   \n{LINE}\n");
        let flows = parse_flows(input.as_bytes()).unwrap();
        assert_eq!(flows.len(), 2);
    }

    #[test]
    fn parse_error_names_line() {
        let input = format!("{LINE}\n{{not json}}\n");
        let err = parse_flows(input.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn replay_rejects_bad_args_before_reading_flows() {
        let flows = parse_flows(LINE.as_bytes()).unwrap();
        let err = replay(&[], &flows, DumpConfig::default(), &HostInfo::new("h", "1")).unwrap_err();
        assert!(err.to_string().contains("exactly one destination"));
    }

    #[test]
    fn read_missing_capture_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_flows(&dir.path().join("nope.jsonl")).is_err());
    }
}
