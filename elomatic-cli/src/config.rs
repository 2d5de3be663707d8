/// Config file loading and creation for the elomatic CLI.
///
/// Config lives at ~/.config/elomatic/config.toml.
/// All fields are optional; CLI args override config values.
use elomatic_core::{RatingConfig, SortMethod};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ElomaticConfig {
    pub data_dir: Option<PathBuf>,
    pub sort: Option<SortMethod>,
    /// `k_factor` sits at the top level of the file.
    #[serde(flatten)]
    pub rating: RatingConfig,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# elomatic configuration
# All values here can be overridden by CLI flags.

# Where the item list is stored
# data_dir = \"/home/me/.local/share/elomatic\"

# Elo sensitivity: how far one comparison can move a score
# k_factor = 32

# Default ordering for `elomatic list`: \"score\", \"alpha\" or \"compares\"
# sort = \"score\"
";

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home)
}

/// Returns the default config path: ~/.config/elomatic/config.toml
pub fn config_path() -> PathBuf {
    home_dir().join(".config").join("elomatic").join("config.toml")
}

/// Returns the default data directory: ~/.local/share/elomatic
pub fn default_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("elomatic")
}

pub fn parse_config(content: &str) -> Result<ElomaticConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> ElomaticConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ElomaticConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        assert_eq!(parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap(), ElomaticConfig::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let cfg = parse_config("data_dir = \"/tmp/elo\"\nk_factor = 24.0\nsort = \"alpha\"\n").unwrap();
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/elo")));
        assert_eq!(cfg.rating.k_factor, 24.0);
        assert_eq!(cfg.sort, Some(SortMethod::Alpha));
    }

    #[test]
    fn test_rating_defaults_and_integer_k_factor() {
        let cfg = parse_config("sort = \"score\"\n").unwrap();
        assert_eq!(cfg.rating, RatingConfig::default());

        let cfg = parse_config("k_factor = 16\n").unwrap();
        assert_eq!(cfg.rating.k_factor, 16.0);
    }

    #[test]
    fn test_parse_rejects_unknown_sort() {
        assert!(parse_config("sort = \"random\"").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("absent.toml"));
        assert_eq!(cfg, ElomaticConfig::default());
    }
}
