//! Configuration for the scenebook tools.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (include_str! from scenebook.toml)
//! 2. ~/.config/scenebook/scenebook.toml
//! 3. ./scenebook.toml
//! 4. `SCENEBOOK_*` environment variables

use config::{Config, Environment, File, FileFormat};
use scenebook_error::{ConfigError, ScenebookError, ScenebookResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../scenebook.toml");

/// Rendering used for lookup results.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Indented tree for terminals
    #[default]
    #[display("plain")]
    Plain,
    /// Markdown task lists
    #[display("markdown")]
    Markdown,
    /// Machine-readable JSON
    #[display("json")]
    Json,
}

impl ReportFormat {
    /// Conventional file extension for exported reports.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Plain => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

/// Top-level scenebook configuration.
///
/// # Example
///
/// ```no_run
/// use scenebook::ScenebookConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScenebookConfig::load()?;
/// println!("Store: {}", config.store_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenebookConfig {
    /// JSON file holding the episode store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default lookup report format
    #[serde(default)]
    pub report_format: ReportFormat,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScenebookConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_level: default_log_level(),
            report_format: ReportFormat::default(),
        }
    }
}

impl ScenebookConfig {
    /// Load configuration from a specific file path, over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScenebookResult<Self> {
        debug!("Loading configuration from file");

        Self::build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    #[instrument]
    pub fn load() -> ScenebookResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scenebook/scenebook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("scenebook").required(false))
            .add_source(Environment::with_prefix("SCENEBOOK"));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ScenebookResult<Self> {
        let config = builder
            .build()
            .map_err(|e| {
                ScenebookError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize::<Self>()
            .map_err(|e| {
                ScenebookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        if config.store_path.as_os_str().is_empty() {
            return Err(ConfigError::new("store_path must not be empty").into());
        }
        Ok(config)
    }
}
