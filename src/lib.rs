//! write-guard - block automated writes to sensitive files
//!
//! A pre-write hook: it reads a JSON description of a proposed file write,
//! matches the target path against sensitive-file patterns and answers
//! allow or block.
//!
//! # Features
//!
//! - **Built-in rules**: `.env*` files, `id_rsa`, `secrets.{json,yaml,yml}`
//! - **Safety levels**: `standard` (the built-ins) or `strict` (more credential stores)
//! - **Custom patterns**: extra rules from TOML config or the builder
//! - **Modes**: enforce, warn-only, or off
//! - **Audit logging**: optional JSONL log of all decisions
//!
//! # Example
//!
//! ```
//! use write_guard::{SafetyLevel, SensitivePathGuard, WriteRequest};
//!
//! let guard = SensitivePathGuard::new(SafetyLevel::Standard).unwrap();
//!
//! let input = r#"{"tool_name":"Write","tool_input":{"file_path":"/app/.env"}}"#;
//! let request = WriteRequest::from_json(input).unwrap();
//!
//! let decision = guard.decide(&request);
//! assert!(decision.is_block());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::{Config, Mode, SafetyLevel};
pub use engine::{decide, GuardBuilder, SensitivePathGuard};
pub use error::{ConfigError, GuardError};
pub use input::{ToolInput, WriteRequest};
pub use output::{Decision, HookOutput};
pub use rules::PatternRule;
