//! JSONL audit logging for write-guard
//!
//! Records each decision as one JSON line for later analysis.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Mode;
use crate::input::WriteRequest;
use crate::output::Decision;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    Warn,
    Disabled,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    /// Tool that was invoked
    pub tool: String,

    /// Hook event that delivered the request (e.g. "PreToolUse")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    /// Target path, if the request had one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// "Tool: path" one-liner
    pub input_summary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from request, decision and enforcement mode
    pub fn new(request: &WriteRequest, decision: &Decision, mode: Mode) -> Self {
        let level = match (mode, decision) {
            (Mode::Off, _) => LogLevel::Disabled,
            (_, Decision::Allow) => LogLevel::Allowed,
            (Mode::Warn, Decision::Block { .. }) => LogLevel::Warn,
            (Mode::Enforce, Decision::Block { .. }) => LogLevel::Blocked,
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: request.tool().to_string(),
            event: request.hook_event_name.clone(),
            path: request.file_path().map(String::from),
            input_summary: request.summary(),
            rule_id: decision.rule_id().map(String::from),
            reason: decision.reason().to_string(),
            session_id: request.session_id.clone(),
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Logger for an optional path; `None` gives a no-op logger
    ///
    /// A log that cannot be opened is reported on stderr and disabled.
    pub fn new(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::open(p).unwrap_or_else(|e| {
                eprintln!(
                    "Warning: Failed to open audit log {}: {} (audit logging disabled)",
                    p.display(),
                    e
                );
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Open (or create) the log at `path`, creating parent directories
    pub fn open(path: &Path) -> Result<Self, std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a decision
    pub fn log_decision(
        &mut self,
        request: &WriteRequest,
        decision: &Decision,
        mode: Mode,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(request, decision, mode);
        self.log(&entry)
    }
}
