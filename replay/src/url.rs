//! Replay URL normalization and extraction

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());

/// Normalize one replay reference to its JSON endpoint.
///
/// A trailing slash is dropped and `.json` appended unless already there.
/// Blank input is `None`.
pub fn normalize_replay_url(value: &str) -> Option<String> {
    let url = value.trim();
    if url.is_empty() {
        return None;
    }
    if url.ends_with(".json") {
        return Some(url.to_string());
    }
    let url = url.strip_suffix('/').unwrap_or(url);
    Some(format!("{url}.json"))
}

/// Display form of a replay URL, the `.json` suffix removed.
pub fn strip_json_suffix(value: &str) -> &str {
    let url = value.trim();
    url.strip_suffix(".json").unwrap_or(url)
}

/// Pull every replay reference out of free-form text.
///
/// Each line contributes its http(s) URLs; a non-blank line with no URL in
/// it is taken as one bare reference (a pasted path, say). Results are
/// normalized and deduplicated, first occurrence order preserved.
pub fn extract_replay_urls(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut found_any = false;
        for m in URL.find_iter(line) {
            found_any = true;
            push_normalized(m.as_str(), &mut seen, &mut urls);
        }
        if !found_any {
            push_normalized(line, &mut seen, &mut urls);
        }
    }

    urls
}

fn push_normalized(candidate: &str, seen: &mut HashSet<String>, urls: &mut Vec<String>) {
    if let Some(normalized) = normalize_replay_url(candidate) {
        if seen.insert(normalized.clone()) {
            urls.push(normalized);
        }
    }
}
