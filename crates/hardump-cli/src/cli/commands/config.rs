//! `hardump config` – show the effective configuration.

use anyhow::Result;
use hardump_core::config::{self, DumpConfig};

pub fn run_config(cfg: &DumpConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
