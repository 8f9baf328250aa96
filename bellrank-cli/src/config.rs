//! Config file loading and creation for the bellrank CLI.
//!
//! Config lives at ~/.config/bellrank/config.toml.
//! All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct BellrankConfig {
    pub progress_file: Option<String>,
    pub quit_token: Option<String>,
    pub log_output: Option<String>,
    /// Relative bucket weights. Length defines the bucket count.
    pub weights: Option<Vec<f64>>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# bellrank configuration
# All values here can be overridden by CLI flags.

# Where partial progress is saved when you quit mid-ranking
# progress_file = \"bellrank_progress.json\"

# Token that quits the session at any comparison prompt (case-insensitive)
# quit_token = \"q\"

# Path for the debug log file
# log_output = \"bellrank.log\"

# Relative bucket weights, best bucket first. All must be positive.
# The number of entries is the number of rating buckets.
# weights = [1, 2, 4, 8, 12, 12, 8, 4, 2, 1]
";

/// Returns the default config path: ~/.config/bellrank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("bellrank").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> BellrankConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => BellrankConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}
