use super::{Config, ConfigError};

/// Upper bound for `--jobs`.
const MAX_JOBS: usize = 1024;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Document name must not be empty".to_string(),
            ));
        }

        if self.jobs > MAX_JOBS {
            return Err(ConfigError::InvalidConfig(format!(
                "Jobs ({}) must not exceed {MAX_JOBS}",
                self.jobs
            )));
        }

        let policy = &self.policy;

        if policy.header_window == 0 {
            return Err(ConfigError::InvalidConfig(
                "Header window must be greater than 0".to_string(),
            ));
        }

        if !(policy.confidence_cap > 0.0 && policy.confidence_cap <= 1.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "Confidence cap ({}) must be in (0, 1]",
                policy.confidence_cap
            )));
        }

        // Room for at least one character plus the ellipsis
        if policy.summary_max_chars < 4 {
            return Err(ConfigError::InvalidConfig(format!(
                "Summary length ({}) must be at least 4",
                policy.summary_max_chars
            )));
        }

        if policy.general_threshold < policy.base_threshold {
            return Err(ConfigError::InvalidConfig(format!(
                "General threshold ({}) must be at least as large as base threshold ({})",
                policy.general_threshold, policy.base_threshold
            )));
        }

        if policy.min_required_matches == 0 {
            return Err(ConfigError::InvalidConfig(
                "Required matches must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
