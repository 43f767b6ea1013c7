use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How an empty header or query list is rendered.
///
/// `String` reproduces the legacy har_dump output, where a list with no
/// items became `""` instead of `[]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyListStyle {
    #[default]
    Array,
    String,
}

fn default_creator_version() -> String {
    "0.1".into()
}

fn default_zhar_level() -> u32 {
    9
}

/// Recorder configuration loaded from `~/.config/hardump/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Overrides `log.creator.name` (default: "<host> har_dump").
    #[serde(default)]
    pub creator_name: Option<String>,
    /// Value of `log.creator.version`.
    #[serde(default = "default_creator_version")]
    pub creator_version: String,
    /// Rendering of empty `headers` / `queryString` lists.
    #[serde(default)]
    pub empty_lists: EmptyListStyle,
    /// zlib level used for `.zhar` destinations (0-9).
    #[serde(default = "default_zhar_level")]
    pub zhar_level: u32,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            creator_name: None,
            creator_version: default_creator_version(),
            empty_lists: EmptyListStyle::default(),
            zhar_level: default_zhar_level(),
        }
    }
}

impl DumpConfig {
    /// Compression level clamped to what zlib accepts.
    pub fn zhar_level(&self) -> u32 {
        self.zhar_level.min(9)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hardump")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DumpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DumpConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DumpConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DumpConfig::default();
        assert!(cfg.creator_name.is_none());
        assert_eq!(cfg.creator_version, "0.1");
        assert_eq!(cfg.empty_lists, EmptyListStyle::Array);
        assert_eq!(cfg.zhar_level(), 9);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DumpConfig {
            creator_name: Some("custom".into()),
            ..DumpConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DumpConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.creator_name.as_deref(), Some("custom"));
        assert_eq!(parsed.creator_version, cfg.creator_version);
        assert_eq!(parsed.empty_lists, cfg.empty_lists);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: DumpConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.creator_version, "0.1");
        assert_eq!(cfg.empty_lists, EmptyListStyle::Array);
        assert_eq!(cfg.zhar_level, 9);
    }

    #[test]
    fn config_toml_legacy_empty_lists() {
        let toml = r#"
            creator_version = "2.0"
            empty_lists = "string"
            zhar_level = 42
        "#;
        let cfg: DumpConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.creator_version, "2.0");
        assert_eq!(cfg.empty_lists, EmptyListStyle::String);
        assert_eq!(cfg.zhar_level(), 9);
    }
}
