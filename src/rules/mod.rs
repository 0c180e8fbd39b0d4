//! Sensitive-file rules for write-guard
//!
//! Defines the built-in path patterns and the owned form used for
//! user-supplied patterns.

pub mod sensitive;

use crate::config::SafetyLevel;

/// A built-in path rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Safety level at which this rule is active
    pub level: SafetyLevel,

    /// Regex pattern to match against the target path
    pub pattern: &'static str,

    /// Human-readable description of what the file holds
    pub reason: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(
        id: &'static str,
        level: SafetyLevel,
        pattern: &'static str,
        reason: &'static str,
    ) -> Self {
        Self {
            id,
            level,
            pattern,
            reason,
        }
    }
}

/// An owned path rule, built from configuration or at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    pub id: String,
    pub pattern: String,
    pub reason: String,
}

impl PatternRule {
    pub fn new(
        id: impl Into<String>,
        pattern: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Wrap the pattern in a case-insensitive group
    pub fn case_insensitive(mut self) -> Self {
        self.pattern = format!("(?i:{})", self.pattern);
        self
    }
}

impl From<&Rule> for PatternRule {
    fn from(rule: &Rule) -> Self {
        PatternRule::new(rule.id, rule.pattern, rule.reason)
    }
}
