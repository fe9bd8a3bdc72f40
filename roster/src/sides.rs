//! Side-slot detection and inference

use chatot_transcript::normalize::normalize_name;
use chatot_transcript::SideSlot;

/// First slot token in normalized text.
///
/// Tokens come from [`normalize_name`] output, so "p1a: Pikachu" has
/// already become "p1a pikachu"; any token starting with "p1" or "p2"
/// counts, position markers included.
pub(crate) fn detect_side_token(normalized: &str) -> Option<SideSlot> {
    for token in normalized.split_whitespace() {
        if token.starts_with("p1") {
            return Some(SideSlot::P1);
        }
        if token.starts_with("p2") {
            return Some(SideSlot::P2);
        }
    }
    None
}

/// Infer which slot belongs to the recording player from co-occurrence of
/// their known names with slot tokens.
///
/// Each line contributes at most one count: the first slot token found,
/// provided any known name also appears in the line. The slot with
/// strictly more counts wins. Zero counts or a tie is `None` - ties mean
/// the transcript is ambiguous and a guess would poison later
/// classification.
///
/// Callers bound the window themselves; the recorder feeds the 2000 most
/// recently retained lines of a match.
pub fn infer_my_side<'a, I, S>(my_names: &[S], lines: I) -> Option<SideSlot>
where
    I: IntoIterator<Item = &'a str>,
    S: AsRef<str>,
{
    let needles: Vec<String> = my_names
        .iter()
        .map(|name| normalize_name(name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect();
    if needles.is_empty() {
        return None;
    }

    let mut p1_hits = 0u32;
    let mut p2_hits = 0u32;
    for raw in lines {
        let normalized = normalize_name(raw);
        let Some(slot) = detect_side_token(&normalized) else {
            continue;
        };
        if needles.iter().any(|needle| normalized.contains(needle)) {
            match slot {
                SideSlot::P1 => p1_hits += 1,
                SideSlot::P2 => p2_hits += 1,
            }
        }
    }

    if p1_hits == p2_hits {
        return None;
    }
    Some(if p1_hits > p2_hits {
        SideSlot::P1
    } else {
        SideSlot::P2
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_side_token() {
        assert_eq!(detect_side_token("p1a pikachu"), Some(SideSlot::P1));
        assert_eq!(detect_side_token("move p2b weezing"), Some(SideSlot::P2));
        assert_eq!(detect_side_token("pikachu used surf"), None);
        assert_eq!(detect_side_token(""), None);
    }

    #[test]
    fn test_detect_side_token_first_wins() {
        assert_eq!(
            detect_side_token("switch p2a weezing p1a pikachu"),
            Some(SideSlot::P2)
        );
    }

    #[test]
    fn test_infer_counts_co_occurrence() {
        let lines = [
            "|move|p1a: Eddie bear|Close Combat|p2a: Weezing",
            "|switch|p1a: Giraffe|Girafarig, F|100/100",
            "|-damage|p2a: Weezing|62/100",
        ];

        assert_eq!(
            infer_my_side(&["Eddie bear", "Giraffe"], lines),
            Some(SideSlot::P1)
        );
    }

    #[test]
    fn test_infer_counts_once_per_line() {
        // Two known names on one line still count a single p1 hit.
        let lines = [
            "|move|p1a: Eddie bear|Trick|p1b: Giraffe",
            "|switch|p2a: Eddie bear|Persian, F|100/100",
            "|-damage|p2a: Eddie bear|70/100",
        ];

        assert_eq!(infer_my_side(&["Eddie bear", "Giraffe"], lines), Some(SideSlot::P2));
    }

    #[test]
    fn test_infer_tie_is_unknown() {
        let lines = [
            "|move|p1a: Eddie bear|Surf|",
            "|move|p2a: Eddie bear|Surf|",
        ];

        assert_eq!(infer_my_side(&["Eddie bear"], lines), None);
    }

    #[test]
    fn test_infer_no_hits_is_unknown() {
        let lines = ["|move|p1a: Someone|Surf|", "no slots here"];

        assert_eq!(infer_my_side(&["Eddie bear"], lines), None);
    }

    #[test]
    fn test_infer_without_names_is_unknown() {
        let lines = ["|move|p1a: Eddie bear|Surf|"];

        assert_eq!(infer_my_side(&[] as &[&str], lines), None);
        assert_eq!(infer_my_side(&["", "!!!"], lines), None);
    }
}
