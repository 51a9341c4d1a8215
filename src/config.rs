use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Context, Result};
use crate::cli::Cli;
use crate::format::FormatChoice;

pub const DEFAULT_OUTPUT_DIR: &str = "~/Downloads/";

fn default_format() -> String {
    FormatChoice::Best.value().to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_copy_ack_ms() -> u64 {
    2000
}

fn default_output_locations() -> Vec<OutputLocation> {
    vec![
        OutputLocation::new("Downloads Folder (Default)", "~/Downloads/"),
        OutputLocation::new("Current Directory", "./"),
        OutputLocation::new("Custom Path (Windows Example)", "C:\\Users\\YourUser\\Videos\\"),
        OutputLocation::new("Custom Path (macOS/Linux Example)", "/Users/YourUser/Movies/"),
    ]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputLocation {
    pub label: String,
    pub path: String,
}

impl OutputLocation {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

/// Settings read from `config.toml`. The file is optional and never written
/// back; every field has a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_format: String,
    pub default_output_dir: String,
    pub copy_ack_ms: u64,
    pub output_locations: Vec<OutputLocation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            default_output_dir: default_output_dir(),
            copy_ack_ms: default_copy_ack_ms(),
            output_locations: default_output_locations(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the standard location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
        if config.output_locations.is_empty() {
            config.output_locations = default_output_locations();
        }
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ytdlp-cmdgen/config.toml"))
    }

    pub fn format(&self) -> FormatChoice {
        FormatChoice::from_value_or_best(&self.default_format)
    }

    pub fn copy_ack(&self) -> Duration {
        Duration::from_millis(self.copy_ack_ms)
    }
}

/// Initial form values: config defaults overridden by command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub url: String,
    pub format: FormatChoice,
    pub output_dir: String,
}

impl FormInputs {
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            url: cli.url.clone().unwrap_or_default(),
            format: cli
                .format
                .as_deref()
                .map(FormatChoice::from_value_or_best)
                .unwrap_or_else(|| config.format()),
            output_dir: cli
                .output
                .clone()
                .unwrap_or_else(|| config.default_output_dir.clone()),
        }
    }
}
