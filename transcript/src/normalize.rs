//! Name normalization and target cleanup
//!
//! Comparisons across the workspace (winner vs login, nickname matching,
//! side inference) all go through [`normalize_name`] so that case, accents,
//! and punctuation never decide a match.

/// Normalize a display name for comparison: lowercase, every run of
/// non-alphanumeric characters collapsed to a single space, trimmed.
///
/// "Fire-Fang!!" and "fire fang" normalize identically. Strings with no
/// alphanumeric content normalize to the empty string.
pub fn normalize_name(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            normalized.push(ch);
        } else if !normalized.is_empty() && !normalized.ends_with(' ') {
            normalized.push(' ');
        }
    }
    normalized.truncate(normalized.trim_end().len());
    normalized
}

/// Clean a damage-target capture for display: wrapping parentheses and the
/// leading "(the) opposing"/"the" wording are stripped.
///
/// The bare "The "/"the " strip can eat a legitimate leading article from a
/// combatant actually named that way; known limitation, kept so freshly
/// extracted names line up with previously recorded ones.
pub fn clean_damage_target(value: &str) -> String {
    let mut cleaned = value.trim();
    cleaned = cleaned.trim_start_matches('(');
    cleaned = cleaned.trim_end_matches(')');
    cleaned = cleaned.trim();

    for prefix in ["The opposing ", "the opposing ", "Opposing ", "opposing "] {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest;
            break;
        }
    }
    for prefix in ["The ", "the "] {
        if let Some(rest) = cleaned.strip_prefix(prefix) {
            cleaned = rest;
            break;
        }
    }

    cleaned.trim().to_string()
}

/// Text after a leading `"slot: "` prefix ("p2a: Pikachu" -> "Pikachu"),
/// or the trimmed input when no prefix is present.
pub fn strip_slot_prefix(value: &str) -> &str {
    match value.split_once(": ") {
        Some((_, rest)) => rest.trim(),
        None => value.trim(),
    }
}
