//! Path matching against a compiled rule set

use crate::output::Decision;
use crate::rules::PatternRule;

use regex::RegexSet;
use std::borrow::Cow;

/// Check a file path against `set`, whose indices line up with `rules`
///
/// An empty path is allowed. Matching runs on the normalized path; the
/// block decision reports the path as given. When several rules match,
/// the first one in set order is reported.
pub fn check_path(file_path: &str, set: &RegexSet, rules: &[PatternRule]) -> Decision {
    if file_path.is_empty() {
        return Decision::Allow;
    }

    let normalized = normalize_path(file_path);
    let first = set.matches(&normalized).into_iter().next();

    match first.and_then(|idx| rules.get(idx)) {
        Some(rule) => Decision::block(&rule.id, file_path, &rule.reason),
        None => Decision::Allow,
    }
}

/// Lexically normalize a path: collapse repeated separators, drop `.`
/// components and trailing separators. `..` is left alone.
fn normalize_path(path: &str) -> Cow<'_, str> {
    let absolute = path.starts_with('/');
    let parts: Vec<&str> = path
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();

    let mut normalized = String::with_capacity(path.len());
    if absolute {
        normalized.push('/');
    }
    normalized.push_str(&parts.join("/"));

    if normalized.is_empty() {
        normalized.push('.');
    }

    if normalized == path {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(normalized)
    }
}
