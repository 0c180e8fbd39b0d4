//! Decision type and hook response formatting
//!
//! The hook answers through its exit status: 0 lets the write through,
//! 2 blocks it and surfaces stderr to the user.

use crate::config::Mode;

/// Exit status for an allowed write
pub const EXIT_ALLOW: i32 = 0;

/// Exit status for unusable input
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for a blocked write
pub const EXIT_BLOCK: i32 = 2;

/// Outcome of evaluating a write request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the write through
    Allow,

    /// Refuse the write
    Block {
        rule_id: String,
        path: String,
        reason: String,
    },
}

impl Decision {
    /// Create a block decision for `path` matched by the given rule
    pub fn block(rule_id: impl Into<String>, path: impl Into<String>, description: &str) -> Self {
        let path = path.into();
        let reason = format!("{} is a protected file ({})", path, description);
        Decision::Block {
            rule_id: rule_id.into(),
            path,
            reason,
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    /// Get the rule ID if applicable
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Block { rule_id, .. } => Some(rule_id),
        }
    }

    /// Get the reason, empty for Allow
    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow => "",
            Decision::Block { reason, .. } => reason,
        }
    }
}

/// What the hook process reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutput {
    pub exit_code: i32,

    /// Message for stderr, if any
    pub message: Option<String>,
}

impl HookOutput {
    /// Silent success
    pub fn allow() -> Self {
        HookOutput {
            exit_code: EXIT_ALLOW,
            message: None,
        }
    }

    /// Blocked write
    pub fn block(path: &str, rule_id: &str, reason: &str) -> Self {
        HookOutput {
            exit_code: EXIT_BLOCK,
            message: Some(block_message(path, rule_id, reason)),
        }
    }

    /// Match reported but not enforced
    pub fn warn(path: &str, rule_id: &str, reason: &str) -> Self {
        HookOutput {
            exit_code: EXIT_ALLOW,
            message: Some(format!(
                "[write-guard:{}] Warning: write to protected file allowed (warn mode): {} ({})",
                rule_id, path, reason
            )),
        }
    }

    /// Input could not be evaluated
    pub fn failure(message: impl Into<String>) -> Self {
        HookOutput {
            exit_code: EXIT_FAILURE,
            message: Some(message.into()),
        }
    }

    /// Translate a decision under the given enforcement mode
    pub fn from_decision(decision: &Decision, mode: Mode) -> Self {
        match decision {
            Decision::Allow => HookOutput::allow(),
            Decision::Block { .. } if mode == Mode::Off => HookOutput::allow(),
            Decision::Block {
                rule_id,
                path,
                reason,
            } => match mode {
                Mode::Warn => HookOutput::warn(path, rule_id, reason),
                _ => HookOutput::block(path, rule_id, reason),
            },
        }
    }
}

/// The stderr text shown when a write is blocked
pub fn block_message(path: &str, rule_id: &str, reason: &str) -> String {
    format!(
        "❌  WRITE BLOCKED\n\
         You tried to modify a protected file: {}\n\
         Rule {}: {}\n\
         If you're sure, rename the file or disable this check.",
        path, rule_id, reason
    )
}
