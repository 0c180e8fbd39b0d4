//! The sensitive-path guard
//!
//! A guard is an immutable, compiled rule set. Evaluating a request is a
//! pure function of the request's path and that set.

pub mod file;

use crate::config::{Config, SafetyLevel};
use crate::error::GuardError;
use crate::input::WriteRequest;
use crate::output::Decision;
use crate::rules::{sensitive, PatternRule};

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

static DEFAULT_GUARD: Lazy<SensitivePathGuard> = Lazy::new(|| {
    GuardBuilder::new()
        .with_defaults(SafetyLevel::Standard)
        .build()
        .expect("built-in patterns compile")
});

/// Decide a request against the built-in standard rules
pub fn decide(request: &WriteRequest) -> Decision {
    DEFAULT_GUARD.decide(request)
}

/// Compiled sensitive-path rules
#[derive(Debug, Clone)]
pub struct SensitivePathGuard {
    rules: Vec<PatternRule>,
    set: RegexSet,
}

impl SensitivePathGuard {
    /// Guard with the built-in rules for `level`
    pub fn new(level: SafetyLevel) -> Result<Self, GuardError> {
        GuardBuilder::new().with_defaults(level).build()
    }

    /// Start an empty builder
    pub fn builder() -> GuardBuilder {
        GuardBuilder::new()
    }

    /// Guard with the configured level plus the configured extra patterns
    ///
    /// Custom patterns that do not compile are left out and returned
    /// alongside the guard.
    pub fn from_config(config: &Config) -> Result<(Self, Vec<GuardError>), GuardError> {
        GuardBuilder::new()
            .with_defaults(config.general.level)
            .rules(config.custom_rules())
            .build_lenient()
    }

    /// Main entry point: evaluate a write request
    pub fn decide(&self, request: &WriteRequest) -> Decision {
        match request.file_path() {
            Some(path) => self.check_path(path),
            None => Decision::Allow,
        }
    }

    /// Evaluate a bare path
    pub fn check_path(&self, path: &str) -> Decision {
        file::check_path(path, &self.set, &self.rules)
    }

    /// Active rules, in evaluation order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}

/// Assembles a [`SensitivePathGuard`]
#[derive(Debug, Clone, Default)]
pub struct GuardBuilder {
    rules: Vec<PatternRule>,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the built-in rules active at `level`
    pub fn with_defaults(mut self, level: SafetyLevel) -> Self {
        self.rules.extend(
            sensitive::rules_for_level(level)
                .into_iter()
                .map(PatternRule::from),
        );
        self
    }

    /// Add a single rule
    pub fn rule(mut self, rule: PatternRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add several rules
    pub fn rules(mut self, rules: impl IntoIterator<Item = PatternRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn pattern(
        self,
        id: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.rule(PatternRule::new(id, pattern, reason))
    }

    /// Compile the rules
    pub fn build(self) -> Result<SensitivePathGuard, GuardError> {
        // Compile one at a time so the error names the offending rule
        for rule in &self.rules {
            validate(rule)?;
        }
        compile(self.rules)
    }

    /// Compile the rules, dropping any whose pattern is invalid
    pub fn build_lenient(self) -> Result<(SensitivePathGuard, Vec<GuardError>), GuardError> {
        let mut skipped = Vec::new();
        let mut rules = Vec::with_capacity(self.rules.len());

        for rule in self.rules {
            match validate(&rule) {
                Ok(()) => rules.push(rule),
                Err(e) => skipped.push(e),
            }
        }

        Ok((compile(rules)?, skipped))
    }
}

fn validate(rule: &PatternRule) -> Result<(), GuardError> {
    Regex::new(&rule.pattern)
        .map(|_| ())
        .map_err(|source| GuardError::InvalidPattern {
            id: rule.id.clone(),
            source,
        })
}

fn compile(rules: Vec<PatternRule>) -> Result<SensitivePathGuard, GuardError> {
    let set = RegexSet::new(rules.iter().map(|r| r.pattern.as_str())).map_err(|source| {
        GuardError::InvalidPattern {
            id: "<set>".to_string(),
            source,
        }
    })?;

    Ok(SensitivePathGuard { rules, set })
}
