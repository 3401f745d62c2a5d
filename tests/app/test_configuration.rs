use doc_classifier::app::{Config, ConfigError, LogFormat, LogLevel, OutputFormat};
use serial_test::serial;
use std::{env, fs, path::PathBuf};
use tempfile::TempDir;

// Helper function to clean all environment variables before and after tests
fn clean_all_env_vars() {
    let env_vars = [
        "DOCUMENT_NAME",
        "OUTPUT_FORMAT",
        "CLASSIFIER_JOBS",
        "LOG_LEVEL",
        "LOG_FORMAT",
        "CONFIG_FILE",
        "DOC_CLASSIFIER_CONFIG",
    ];

    unsafe {
        for var in &env_vars {
            env::remove_var(var);
        }
    }
}

const POLICY_TOML: &str = r#"
format = "summary"
log_level = "info"
jobs = 4

[policy]
base_threshold = 6
general_threshold = 8
confidence_cap = 0.95
"#;

#[test]
#[serial]
fn test_config_from_args() {
    clean_all_env_vars();

    let args = vec![
        "doc-classifier",
        "--name",
        "po_4521.txt",
        "--format",
        "pretty",
        "--explain",
        "-r",
        "-j",
        "2",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "docs",
        "more/invoice.txt",
    ];

    let config = Config::from_args(args).unwrap();

    assert_eq!(config.name, "po_4521.txt");
    assert_eq!(config.format, OutputFormat::Pretty);
    assert!(config.explain);
    assert!(config.recursive);
    assert_eq!(config.jobs, 2);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(
        config.paths,
        vec![PathBuf::from("docs"), PathBuf::from("more/invoice.txt")]
    );
    assert_eq!(config.policy.base_threshold, 5);
}

#[test]
#[serial]
fn test_config_defaults_from_bare_args() {
    clean_all_env_vars();

    let config = Config::from_args(["doc-classifier"]).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_config_from_environment() {
    clean_all_env_vars();

    unsafe {
        env::set_var("DOCUMENT_NAME", "scan.txt");
        env::set_var("OUTPUT_FORMAT", "summary");
        env::set_var("CLASSIFIER_JOBS", "3");
        env::set_var("LOG_LEVEL", "trace");
    }

    let config = Config::from_args_and_env(["doc-classifier"]).unwrap();

    assert_eq!(config.name, "scan.txt");
    assert_eq!(config.format, OutputFormat::Summary);
    assert_eq!(config.jobs, 3);
    assert_eq!(config.log_level, LogLevel::Trace);
    assert_eq!(config.log_format, LogFormat::Text);

    // Arguments win over the environment.
    let config = Config::from_args_and_env(["doc-classifier", "-j", "5"]).unwrap();
    assert_eq!(config.jobs, 5);

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_invalid_environment_value() {
    clean_all_env_vars();

    unsafe {
        env::set_var("CLASSIFIER_JOBS", "many");
    }
    let result = Config::from_args_and_env(["doc-classifier"]);
    assert!(matches!(result, Err(ConfigError::Cli(_))));

    unsafe {
        env::remove_var("CLASSIFIER_JOBS");
        env::set_var("OUTPUT_FORMAT", "xml");
    }
    let result = Config::from_args_and_env(["doc-classifier"]);
    assert!(matches!(result, Err(ConfigError::Cli(_))));

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_help_and_usage_errors_are_returned() {
    clean_all_env_vars();

    match Config::from_args(["doc-classifier", "--help"]) {
        Err(ConfigError::Cli(e)) => assert_eq!(e.kind(), clap::error::ErrorKind::DisplayHelp),
        other => panic!("expected help, got {other:?}"),
    }
    assert!(matches!(
        Config::from_args(["doc-classifier", "--no-such-flag"]),
        Err(ConfigError::Cli(_))
    ));
}

#[test]
#[serial]
fn test_config_from_file_with_policy() {
    clean_all_env_vars();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("classifier.toml");
    fs::write(&path, POLICY_TOML).unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.format, OutputFormat::Summary);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.jobs, 4);
    assert_eq!(config.policy.base_threshold, 6);
    assert_eq!(config.policy.general_threshold, 8);
    assert!((config.policy.confidence_cap - 0.95).abs() < f64::EPSILON);
    // Unlisted policy keys keep their defaults.
    assert_eq!(config.policy.header_window, 120);
    assert_eq!(config.name, "stdin");
}

#[test]
#[serial]
fn test_config_file_rejects_invalid_policy() {
    clean_all_env_vars();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[policy]\nbase_threshold = 8\ngeneral_threshold = 4\n").unwrap();

    let result = Config::from_file(&path);
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
#[serial]
fn test_config_file_parse_error() {
    clean_all_env_vars();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("garbage.toml");
    fs::write(&path, "format = [").unwrap();

    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::ParseError(_))
    ));
    assert!(matches!(
        Config::from_file(temp_dir.path().join("missing.toml")),
        Err(ConfigError::FileError(_))
    ));
}

#[test]
#[serial]
fn test_args_override_config_file() {
    clean_all_env_vars();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("classifier.toml");
    fs::write(&path, POLICY_TOML).unwrap();
    let path_arg = path.to_string_lossy().to_string();

    let config = Config::from_args_and_env([
        "doc-classifier",
        "--config-file",
        path_arg.as_str(),
        "--format",
        "pretty",
    ])
    .unwrap();

    // Explicit argument wins, untouched fields come from the file.
    assert_eq!(config.format, OutputFormat::Pretty);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.jobs, 4);
    assert_eq!(config.policy.base_threshold, 6);
}

#[test]
#[serial]
fn test_inline_config_from_environment() {
    clean_all_env_vars();

    unsafe {
        env::set_var("DOC_CLASSIFIER_CONFIG", POLICY_TOML);
    }

    let inline = Config::from_args_and_env(["doc-classifier"]).unwrap();
    assert_eq!(inline.format, OutputFormat::Summary);
    assert_eq!(inline.policy.general_threshold, 8);

    let from_args = Config::from_args_and_env(["doc-classifier", "-j", "1"]).unwrap();
    assert_eq!(from_args.jobs, 1);
    assert_eq!(from_args.format, OutputFormat::Summary);
    assert_eq!(from_args.policy.base_threshold, 6);

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_validation_rejects_out_of_range_values() {
    clean_all_env_vars();

    let mut config = Config::default();
    config.jobs = 100_000;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.policy.confidence_cap = 1.5;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.name = String::new();
    assert!(config.validate().is_err());

    assert!(Config::default().validate().is_ok());
}
