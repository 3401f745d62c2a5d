use super::{ConfigError, LogFormat, LogLevel, OutputFormat};
use crate::classifier::GatePolicy;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding a whole TOML configuration inline.
pub const INLINE_CONFIG_ENV: &str = "DOC_CLASSIFIER_CONFIG";

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Files or directories to classify (content is read from stdin when empty)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// File name reported for stdin content
    #[arg(long, env = "DOCUMENT_NAME", default_value = "stdin")]
    pub name: String,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format
    #[arg(long, env = "OUTPUT_FORMAT", default_value = "ndjson")]
    pub format: OutputFormat,

    /// Include the decision trace in every record
    #[arg(long)]
    pub explain: bool,

    /// Worker threads for batch classification (0 = one per CPU)
    #[arg(short, long, env = "CLASSIFIER_JOBS", default_value = "0")]
    pub jobs: usize,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Gate policy (configuration file only)
    #[arg(skip)]
    pub policy: GatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            name: "stdin".to_string(),
            recursive: false,
            format: OutputFormat::Ndjson,
            explain: false,
            jobs: 0,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Text,
            config_file: None,
            policy: GatePolicy::default(),
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses CLI arguments (clap folds in the environment), then layers them
    /// over the configuration file, or the inline TOML in
    /// `DOC_CLASSIFIER_CONFIG` when no file is given.
    pub fn from_args_and_env<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::try_parse_from(args)?;

        let base_config = if let Some(path) = &config.config_file {
            Some(Self::from_file(path)?)
        } else if let Ok(inline) = std::env::var(INLINE_CONFIG_ENV) {
            Some(Self::from_toml_str(&inline)?)
        } else {
            None
        };

        if let Some(base_config) = base_config {
            config.merge_from(base_config);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Takes values from `base` for every field still at its default.
    /// The gate policy always comes from `base`.
    pub fn merge_from(&mut self, base: Config) {
        let defaults = Config::default();

        if self.paths.is_empty() {
            self.paths = base.paths;
        }
        if self.name == defaults.name {
            self.name = base.name;
        }
        self.recursive |= base.recursive;
        if self.format == defaults.format {
            self.format = base.format;
        }
        self.explain |= base.explain;
        if self.jobs == defaults.jobs {
            self.jobs = base.jobs;
        }
        if self.log_level == defaults.log_level {
            self.log_level = base.log_level;
        }
        if self.log_format == defaults.log_format {
            self.log_format = base.log_format;
        }
        self.policy = base.policy;
    }
}
