//! Built-in sensitive path patterns
//!
//! The standard set covers environment files, the default RSA private key
//! and secrets manifests. Strict adds other credential stores.

use crate::config::SafetyLevel;
use crate::rules::Rule;

/// Always-on rules
pub const STANDARD_PATTERNS: &[Rule] = &[
    Rule::new(
        "env-file",
        SafetyLevel::Standard,
        r"(?i)\.env(\.|$)",
        "Environment file may contain secrets",
    ),
    Rule::new(
        "ssh-private-key",
        SafetyLevel::Standard,
        r"id_rsa$",
        "SSH private key",
    ),
    Rule::new(
        "secrets-file",
        SafetyLevel::Standard,
        r"(?i)secrets\.(json|ya?ml)$",
        "Secrets configuration file",
    ),
];

/// Extra rules enabled at the strict level
pub const STRICT_PATTERNS: &[Rule] = &[
    Rule::new(
        "ssh-private-key-other",
        SafetyLevel::Strict,
        r"id_(ed25519|ecdsa|dsa)$",
        "SSH private key",
    ),
    Rule::new(
        "pem-file",
        SafetyLevel::Strict,
        r"(?i)\.pem$",
        "PEM certificate/key file",
    ),
    Rule::new(
        "key-file",
        SafetyLevel::Strict,
        r"(?i)\.key$",
        "Private key file",
    ),
    Rule::new(
        "p12-file",
        SafetyLevel::Strict,
        r"(?i)\.p12$",
        "PKCS#12 certificate file",
    ),
    Rule::new(
        "aws-credentials",
        SafetyLevel::Strict,
        r"\.aws/credentials$",
        "AWS credentials file",
    ),
    Rule::new(
        "credentials-json",
        SafetyLevel::Strict,
        r"(?i)credentials\.json$",
        "Credentials configuration file",
    ),
    Rule::new(
        "netrc",
        SafetyLevel::Strict,
        r"\.netrc$",
        "Network credentials file",
    ),
    Rule::new(
        "npmrc",
        SafetyLevel::Strict,
        r"\.npmrc$",
        "npm authentication tokens",
    ),
    Rule::new(
        "pypirc",
        SafetyLevel::Strict,
        r"\.pypirc$",
        "PyPI authentication file",
    ),
    Rule::new(
        "pgpass",
        SafetyLevel::Strict,
        r"\.pgpass$",
        "PostgreSQL password file",
    ),
    Rule::new(
        "secrets-toml",
        SafetyLevel::Strict,
        r"(?i)secrets\.toml$",
        "Secrets configuration file",
    ),
];

/// Get all built-in rules active at the given safety level
pub fn rules_for_level(level: SafetyLevel) -> Vec<&'static Rule> {
    STANDARD_PATTERNS
        .iter()
        .chain(STRICT_PATTERNS.iter())
        .filter(|rule| level.includes(rule.level))
        .collect()
}
