pub mod config;
pub mod logging_system;
pub mod output;

pub use config::{Config, ConfigError, LogFormat, LogLevel, OutputFormat};
pub use logging_system::{LoggingError, LoggingSystem, setup_logging};
pub use output::OutputError;

use crate::batch::{BatchReport, ClassifiedFile, PathOptions, classify_paths};
use crate::classifier::Classifier;
use crate::extract::{PlainTextExtractor, TextExtractor};
use anyhow::{Context, Result};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};

pub struct App {
    config: Config,
    classifier: Classifier,
    extractor: Box<dyn TextExtractor>,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args_and_env(args)?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        if let Err(e) = setup_logging(config.log_level, config.log_format) {
            eprintln!("Warning: {e}, continuing without logging");
        }

        let classifier = Classifier::with_policy(config.policy.clone())
            .context("failed to compile classification rules")?;

        info!("Starting doc-classifier v{}", crate::VERSION);
        debug!(
            "Configuration: paths={}, format={:?}, recursive={}, jobs={}",
            config.paths.len(),
            config.format,
            config.recursive,
            config.jobs
        );

        Ok(Self {
            config,
            classifier,
            extractor: Box::new(PlainTextExtractor::new()),
        })
    }

    /// Replaces the plain-text extractor, e.g. with a client for an external
    /// extraction service.
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self) -> Result<BatchReport> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Classifies the configured paths, or `input` when there are none, and
    /// renders the records to `out`.
    pub fn run_with<R: Read, W: Write>(&self, input: R, mut out: W) -> Result<BatchReport> {
        let (files, report) = if self.config.paths.is_empty() {
            self.classify_input(input)?
        } else {
            self.classify_configured_paths()?
        };

        output::render(&mut out, self.config.format, &files, &report)
            .context("failed to write classification output")?;
        Ok(report)
    }

    fn classify_input<R: Read>(&self, mut input: R) -> Result<(Vec<ClassifiedFile>, BatchReport)> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .context("failed to read document from stdin")?;
        let content = String::from_utf8_lossy(&bytes);

        let evaluation = self.classifier.evaluate(&self.config.name, &content);
        let files = vec![ClassifiedFile {
            path: PathBuf::from(&self.config.name),
            file_name: self.config.name.clone(),
            text_extracted: true,
            extracted_text_length: content.chars().count(),
            result: evaluation.result,
            trace: self.config.explain.then_some(evaluation.trace),
        }];
        let report = BatchReport::from_files(&files);
        Ok((files, report))
    }

    fn classify_configured_paths(&self) -> Result<(Vec<ClassifiedFile>, BatchReport)> {
        let options = PathOptions {
            recursive: self.config.recursive,
            explain: self.config.explain,
        };
        let run = || {
            classify_paths(
                &self.classifier,
                self.extractor.as_ref(),
                &self.config.paths,
                options,
            )
        };

        let classified = if self.config.jobs > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.jobs)
                .build()
                .context("failed to build worker pool")?;
            pool.install(run)
        } else {
            run()
        };

        classified.context("failed to collect input files")
    }
}

// Main entry point for the application
pub fn main() -> Result<()> {
    let app = match App::from_args(std::env::args_os()) {
        Ok(app) => app,
        Err(e) => {
            // --help, --version and usage errors print through clap
            if let Some(ConfigError::Cli(cli_error)) = e.downcast_ref::<ConfigError>() {
                cli_error.exit();
            }
            eprintln!("Configuration error: {e:#}");
            process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        error!("Application error: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    Ok(())
}
