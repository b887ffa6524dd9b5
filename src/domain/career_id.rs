//! Career identifier normalization.
//!
//! Stored ids are lowercase and hyphenated (`software-developer`). Callers
//! often pass display names instead (`Software Developer`), so lookups try
//! the normalized form after the raw one.

/// Normalize a career identifier.
///
/// Trims the input, lowercases it, and replaces every run of whitespace
/// with a single `-`. Other characters, including existing hyphens, are
/// left untouched.
///
/// Lowercasing is applied to the whole string so context-dependent
/// mappings (Greek final sigma) come out right.
pub fn normalize_career_id(id: &str) -> String {
    let lowered = id.trim().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if in_whitespace {
            normalized.push('-');
            in_whitespace = false;
        }
        normalized.push(c);
    }

    normalized
}
