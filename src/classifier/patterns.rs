// Named, weighted regex pattern sets compiled from static tables
use super::regex_error::RegexError;
use regex::Regex;
use std::collections::HashSet;

/// Static description of one pattern: `(name, pattern, weight)`.
///
/// Patterns are written in lowercase and run against normalized text, so
/// they carry no case-insensitivity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSpec {
    pub name: &'static str,
    pub pattern: &'static str,
    pub weight: u32,
}

impl PatternSpec {
    pub const fn new(name: &'static str, pattern: &'static str) -> Self {
        Self::weighted(name, pattern, 1)
    }

    pub const fn weighted(name: &'static str, pattern: &'static str, weight: u32) -> Self {
        Self {
            name,
            pattern,
            weight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    name: &'static str,
    weight: u32,
    regex: Regex,
}

impl CompiledPattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// An ordered set of compiled patterns.
///
/// Each pattern counts at most once per text regardless of how many times it
/// occurs.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    pub fn compile(label: &'static str, specs: &[PatternSpec]) -> Result<Self, RegexError> {
        let mut seen = HashSet::with_capacity(specs.len());
        let mut patterns = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.name) {
                return Err(RegexError::DuplicateName {
                    set: label.to_string(),
                    name: spec.name.to_string(),
                });
            }

            let regex = Regex::new(spec.pattern).map_err(|e| RegexError::CompilationFailed {
                pattern: spec.pattern.to_string(),
                name: spec.name.to_string(),
                source: e,
            })?;

            patterns.push(CompiledPattern {
                name: spec.name,
                weight: spec.weight,
                regex,
            });
        }

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns that match `text`, in declaration order.
    pub fn matched<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a CompiledPattern> {
        self.patterns.iter().filter(move |p| p.is_match(text))
    }

    pub fn count_matches(&self, text: &str) -> usize {
        self.matched(text).count()
    }
}
