use std::path::Path;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::UiTheme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid portfolio data{}: {source}", describe_path(.path))]
    Data {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub identity: IdentityConfig,
    pub ui: UiConfig,
    pub data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            identity: IdentityConfig::default(),
            ui: UiConfig::default(),
            data_path: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text, path),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Cadences of the scripted output, in milliseconds of the logical timeline.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct TimingConfig {
    pub word_delay_ms: u64,
    pub boot_line_ms: u64,
    pub portfolio_switch_ms: u64,
    pub project_stagger_ms: u64,
    pub skill_category_stagger_ms: u64,
    pub skill_item_stagger_ms: u64,
    /// Gap between a category's last skill row and its trailing blank.
    pub skill_spacer_ms: u64,
    pub matrix_row_ms: u64,
    /// When the matrix completion lines land, independent of the row cadence.
    pub matrix_finale_ms: u64,
    pub hack_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            word_delay_ms: 50,
            boot_line_ms: 150,
            portfolio_switch_ms: 1_000,
            project_stagger_ms: 400,
            skill_category_stagger_ms: 800,
            skill_item_stagger_ms: 100,
            skill_spacer_ms: 200,
            matrix_row_ms: 200,
            matrix_finale_ms: 1_200,
            hack_step_ms: 700,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityConfig {
    pub title: String,
    pub version: String,
    pub prompt: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            title: "TALHA_SHAIKH.EXE".to_string(),
            version: "v2.1.7".to_string(),
            prompt: "neural@matrix:~$".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: UiTheme,
    pub boot: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Matrix,
            boot: true,
        }
    }
}
