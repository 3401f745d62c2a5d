// Tracing subscriber setup; all diagnostics go to stderr
use super::config::{LogFormat, LogLevel};
use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {details}")]
    InvalidFilter { filter: String, details: String },

    #[error("Logging initialization failed: {0}")]
    InitFailed(String),
}

/// A single `target=level` filter directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDirective {
    pub target: String,
    pub level: LogLevel,
}

impl LogDirective {
    pub fn new(target: impl Into<String>, level: LogLevel) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    pub fn to_filter_string(&self) -> String {
        format!("{}={}", self.target, self.level.as_str())
    }
}

pub struct LoggingSystem {
    directives: Vec<LogDirective>,
    format: LogFormat,
}

impl LoggingSystem {
    pub fn new(format: LogFormat) -> Self {
        Self {
            directives: Vec::new(),
            format,
        }
    }

    pub fn add_directive(&mut self, directive: LogDirective) {
        self.directives.push(directive);
    }

    /// Quiets noisy dependencies.
    pub fn add_default_directives(&mut self) {
        self.add_directive(LogDirective::new("rayon", LogLevel::Warn));
        self.add_directive(LogDirective::new("rayon_core", LogLevel::Warn));
    }

    pub fn build_filter_string(&self, default_level: LogLevel) -> String {
        let mut filter_parts = Vec::with_capacity(self.directives.len() + 1);

        // Default level first
        filter_parts.push(default_level.as_str().to_string());

        for directive in &self.directives {
            filter_parts.push(directive.to_filter_string());
        }

        filter_parts.join(",")
    }

    /// `RUST_LOG` wins over the configured level when set.
    pub fn build_filter(&self, default_level: LogLevel) -> Result<EnvFilter, LoggingError> {
        let filter_string = match std::env::var("RUST_LOG") {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.build_filter_string(default_level),
        };

        EnvFilter::try_new(&filter_string).map_err(|e| LoggingError::InvalidFilter {
            filter: filter_string.clone(),
            details: e.to_string(),
        })
    }

    pub fn initialize_tracing(&self, default_level: LogLevel) -> Result<(), LoggingError> {
        let env_filter = self.build_filter(default_level)?;

        let result = match self.format {
            LogFormat::Text => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .compact(),
                )
                .try_init(),
            LogFormat::Json => tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_current_span(false),
                )
                .try_init(),
        };

        result.map_err(|e| LoggingError::InitFailed(e.to_string()))
    }
}

static INIT_RESULT: OnceLock<Result<(), LoggingError>> = OnceLock::new();

/// Installs the global subscriber once; later calls return the first result.
pub fn setup_logging(level: LogLevel, format: LogFormat) -> Result<(), LoggingError> {
    INIT_RESULT
        .get_or_init(|| {
            let mut logging_system = LoggingSystem::new(format);
            logging_system.add_default_directives();
            logging_system.initialize_tracing(level)
        })
        .clone()
}
