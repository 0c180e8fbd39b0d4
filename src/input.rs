//! Input parsing for the pre-write hook JSON format
//!
//! Only `tool_input.file_path` influences the decision; everything else is
//! carried along for the audit log.

use serde::Deserialize;

/// A proposed file write, as delivered on stdin
#[derive(Debug, Default, Deserialize)]
pub struct WriteRequest {
    /// Name of the tool being invoked (e.g. "Write", "Edit")
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool-specific input parameters
    #[serde(default)]
    pub tool_input: ToolInput,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,

    /// Hook event name (e.g. "PreToolUse")
    #[serde(default)]
    pub hook_event_name: Option<String>,
}

/// The part of the tool input the guard consults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolInput {
    pub file_path: Option<String>,
}

impl<'de> Deserialize<'de> for ToolInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Any shape is accepted; a non-string file_path counts as absent
        let value = serde_json::Value::deserialize(deserializer)?;
        let file_path = value
            .get("file_path")
            .and_then(|v| v.as_str())
            .map(String::from);

        Ok(ToolInput { file_path })
    }
}

impl WriteRequest {
    /// Build a request for a bare path
    pub fn for_path(path: impl Into<String>) -> Self {
        WriteRequest {
            tool_input: ToolInput {
                file_path: Some(path.into()),
            },
            ..Default::default()
        }
    }

    /// Parse input from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The target path, if present and non-empty
    pub fn file_path(&self) -> Option<&str> {
        self.tool_input
            .file_path
            .as_deref()
            .filter(|p| !p.is_empty())
    }

    /// Tool name for logging
    pub fn tool(&self) -> &str {
        self.tool_name.as_deref().unwrap_or("unknown")
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        match self.file_path() {
            Some(path) => format!("{}: {}", self.tool(), path),
            None => format!("{}: <no path>", self.tool()),
        }
    }
}
