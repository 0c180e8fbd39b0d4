//! Process-boundary adapter: raw stdin text in, hook output out

use crate::audit::AuditLogger;
use crate::config::Mode;
use crate::engine::SensitivePathGuard;
use crate::input::WriteRequest;
use crate::output::{Decision, HookOutput};

/// Evaluate one raw hook payload
///
/// Blank input is allowed. Input that is not a JSON object fails with
/// the generic failure status, never the block status.
pub fn handle(
    raw: &str,
    guard: &SensitivePathGuard,
    mode: Mode,
    logger: &mut AuditLogger,
) -> HookOutput {
    if raw.trim().is_empty() {
        return HookOutput::allow();
    }

    let request = match WriteRequest::from_json(raw) {
        Ok(request) => request,
        Err(e) => {
            return HookOutput::failure(format!(
                "write-guard: failed to parse hook input: {}",
                e
            ))
        }
    };

    evaluate(&request, guard, mode, logger)
}

/// Decide an already parsed request, record it, and translate for `mode`
pub fn evaluate(
    request: &WriteRequest,
    guard: &SensitivePathGuard,
    mode: Mode,
    logger: &mut AuditLogger,
) -> HookOutput {
    let decision = if mode == Mode::Off {
        Decision::Allow
    } else {
        guard.decide(request)
    };

    if let Err(e) = logger.log_decision(request, &decision, mode) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    HookOutput::from_decision(&decision, mode)
}
