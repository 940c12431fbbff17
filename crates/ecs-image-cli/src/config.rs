//! Application settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns settings; the core crate never sees them.  These are the
//! tool's own settings, not the image configuration being validated.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ECS_IMAGE__OUTPUT__FORMAT=json`, ...
//! 3. Settings file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "ECS_IMAGE";

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Validation behaviour.
    pub validation: ValidationConfig,
    /// Region catalog additions.
    pub regions: RegionsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Force the region bypass for every image configuration.
    pub skip_region_validation: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionsConfig {
    /// Region ids accepted in addition to the built-in table.
    pub extra: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load settings, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// path must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file_source = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(file_source)
            .add_source(Self::env_source())
            .build()
            .context("assembling settings")?;
        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> anyhow::Result<Self> {
        settings
            .try_deserialize()
            .context("settings do not match the expected shape")
    }

    fn env_source() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("regions.extra")
            .try_parsing(true)
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ecs-image.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ecs-image", "ecs-image")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ecs-image.toml"))
    }
}
