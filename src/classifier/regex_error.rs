// Errors raised while compiling the rule table
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RegexError {
    #[error("Regex compilation failed for pattern '{pattern}' (name: {name}): {source}")]
    CompilationFailed {
        pattern: String,
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate pattern name '{name}' in set '{set}'")]
    DuplicateName { set: String, name: String },
}
