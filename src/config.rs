//! Configuration loading for write-guard
//!
//! Supports TOML configuration with embedded defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::rules::PatternRule;

/// Safety level determines which built-in rules are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// Environment files, `id_rsa` and secrets manifests
    #[default]
    Standard,

    /// Standard plus other key material and credential stores
    Strict,
}

impl SafetyLevel {
    /// Check if a rule level is active under this safety level
    pub fn includes(&self, rule_level: SafetyLevel) -> bool {
        match self {
            SafetyLevel::Standard => rule_level == SafetyLevel::Standard,
            SafetyLevel::Strict => true,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(SafetyLevel::Standard),
            "strict" => Some(SafetyLevel::Strict),
            _ => None,
        }
    }
}

/// What the hook does with a block decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Block and exit with the block status
    #[default]
    Enforce,

    /// Report the match but let the write through
    Warn,

    /// Skip evaluation entirely
    Off,
}

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Safety level for built-in rules
    pub level: SafetyLevel,

    /// Enforcement mode
    pub mode: Mode,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: SafetyLevel::Standard,
            mode: Mode::Enforce,
            audit_log: false,
            audit_path: Some("~/.claude/write-guard/audit.jsonl".to_string()),
        }
    }
}

/// A user-supplied sensitive path pattern
#[derive(Debug, Clone, Deserialize)]
pub struct PatternEntry {
    /// Regex matched against the target path
    pub pattern: String,

    /// Rule identifier reported on block (defaults to "custom-<n>")
    #[serde(default)]
    pub id: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub case_insensitive: bool,
}

impl PatternEntry {
    /// Convert to an owned rule; `index` numbers unnamed entries
    pub fn to_rule(&self, index: usize) -> PatternRule {
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| format!("custom-{}", index + 1));
        let reason = self
            .reason
            .clone()
            .unwrap_or_else(|| "Matches a configured sensitive pattern".to_string());

        let rule = PatternRule::new(id, self.pattern.clone(), reason);
        if self.case_insensitive {
            rule.case_insensitive()
        } else {
            rule
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    /// Additional patterns on top of the built-in set
    pub patterns: Vec<PatternEntry>,
}

impl Config {
    /// Load configuration from the first standard location found, or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/write-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/write-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Warning: {}", e),
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply WRITE_GUARD_* overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using the given variable lookup
    ///
    /// `WRITE_GUARD_DISABLED` wins over `WRITE_GUARD_WARN_ONLY`.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("WRITE_GUARD_DISABLED").is_some() {
            self.general.mode = Mode::Off;
        } else if lookup("WRITE_GUARD_WARN_ONLY").is_some() {
            self.general.mode = Mode::Warn;
        }
    }

    /// User-supplied patterns as owned rules
    pub fn custom_rules(&self) -> Vec<PatternRule> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.to_rule(i))
            .collect()
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if audit logging is on
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
level = "standard"
mode = "enforce"
audit_log = false
audit_path = "~/.claude/write-guard/audit.jsonl"

# Additional sensitive patterns, e.g.
#
# [[patterns]]
# id = "vault-token"
# pattern = "\\.vault-token$"
# reason = "Vault token file"
"#;
