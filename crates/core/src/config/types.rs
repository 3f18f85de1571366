use std::path::PathBuf;

use serde::Deserialize;

use crate::docs::ExclusionSet;

/// Default docs directory, relative to the working directory.
pub const DEFAULT_DOCS_DIR: &str = "docs";

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    /// Docs directory; `~` and environment variables are expanded.
    pub docs_dir: Option<String>,
    /// Directory names skipped at any depth. Replaces the default set when present.
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

// stdout carries the report, so stay quiet on stderr unless asked.
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Config file the values came from, `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
    pub docs_dir: PathBuf,
    pub exclusions: ExclusionSet,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            exclusions: ExclusionSet::default(),
            logging: LoggingConfig::default(),
        }
    }
}
