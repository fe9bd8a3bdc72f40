//! Match metadata recognition
//!
//! Format, player names, and the winner are announced in both dialects.
//! Recognition here is independent of event extraction; callers run it over
//! a whole transcript, or over each fresh line, and merge what comes back.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;
use crate::protocol::SideSlot;

static FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Format:\s*(?P<format>.+)$").unwrap());
static START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Battle started between (?P<player1>.+?) and (?P<player2>.+?)!$").unwrap()
});
static WIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?P<winner>.+?) won the battle!$").unwrap());

/// Match-level facts recognized so far. Every field is optional; later
/// recognitions of the same field overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchMeta {
    pub format: Option<String>,
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub winner: Option<String>,
}

/// Match outcome from the recording player's perspective; player1 is
/// assumed to be them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Won,
    Lost,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Won => "Won",
            MatchResult::Lost => "Lost",
        }
    }
}

impl MatchMeta {
    /// True when no field has been recognized.
    pub fn is_empty(&self) -> bool {
        self.format.is_none()
            && self.player1.is_none()
            && self.player2.is_none()
            && self.winner.is_none()
    }

    /// Fold `newer` over `self`: fields `newer` recognized win, fields it
    /// did not leave `self` untouched.
    pub fn merge(&mut self, newer: MatchMeta) {
        if newer.format.is_some() {
            self.format = newer.format;
        }
        if newer.player1.is_some() {
            self.player1 = newer.player1;
        }
        if newer.player2.is_some() {
            self.player2 = newer.player2;
        }
        if newer.winner.is_some() {
            self.winner = newer.winner;
        }
    }

    /// Outcome label, comparing normalized names.
    ///
    /// `None` whenever winner or player1 is unknown, and whenever the
    /// winner matches neither recorded player.
    pub fn result(&self) -> Option<MatchResult> {
        let winner = normalize_name(self.winner.as_deref()?);
        let player1 = normalize_name(self.player1.as_deref()?);
        if winner == player1 {
            return Some(MatchResult::Won);
        }
        if let Some(player2) = self.player2.as_deref() {
            if winner == normalize_name(player2) {
                return Some(MatchResult::Lost);
            }
        }
        None
    }
}

/// Scan lines for metadata markers in either dialect.
///
/// Protocol: `|tier|FORMAT`, `|player|SLOT|NAME|...`, `|win|NAME`.
/// Narrative: `Format: ...`, `Battle started between X and Y!`,
/// `X won the battle!`. Empty field values are treated as unrecognized.
pub fn parse_match_meta<'a, I>(lines: I) -> MatchMeta
where
    I: IntoIterator<Item = &'a str>,
{
    let mut meta = MatchMeta::default();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('|') {
            apply_protocol_meta(line, &mut meta);
            continue;
        }

        if let Some(caps) = FORMAT.captures(line) {
            meta.format = non_empty(&caps["format"]);
            continue;
        }
        if let Some(caps) = START.captures(line) {
            meta.player1 = non_empty(&caps["player1"]);
            meta.player2 = non_empty(&caps["player2"]);
            continue;
        }
        if let Some(caps) = WIN.captures(line) {
            meta.winner = non_empty(&caps["winner"]);
        }
    }

    meta
}

fn apply_protocol_meta(line: &str, meta: &mut MatchMeta) {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return;
    }

    match parts[1] {
        "tier" if parts.len() > 2 => meta.format = non_empty(parts[2]),
        "player" if parts.len() > 3 => match SideSlot::parse(parts[2].trim()) {
            Some(SideSlot::P1) => meta.player1 = non_empty(parts[3]),
            Some(SideSlot::P2) => meta.player2 = non_empty(parts[3]),
            None => {}
        },
        "win" if parts.len() > 2 => meta.winner = non_empty(parts[2]),
        _ => {}
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_markers() {
        let meta = parse_match_meta([
            "|tier|[Gen 9] OU",
            "|player|p1|Euic|169|1500",
            "|player|p2|Rival|266|",
            "|win|Euic",
        ]);

        assert_eq!(meta.format.as_deref(), Some("[Gen 9] OU"));
        assert_eq!(meta.player1.as_deref(), Some("Euic"));
        assert_eq!(meta.player2.as_deref(), Some("Rival"));
        assert_eq!(meta.winner.as_deref(), Some("Euic"));
    }

    #[test]
    fn test_narrative_markers() {
        let meta = parse_match_meta([
            "Format: OU (current)",
            "Battle started between Euic and Rival!",
            "Rival won the battle!",
        ]);

        assert_eq!(meta.format.as_deref(), Some("OU (current)"));
        assert_eq!(meta.player1.as_deref(), Some("Euic"));
        assert_eq!(meta.player2.as_deref(), Some("Rival"));
        assert_eq!(meta.winner.as_deref(), Some("Rival"));
    }

    #[test]
    fn test_unknown_player_slot_ignored() {
        let meta = parse_match_meta(["|player|p3|Ghost|1|"]);
        assert!(meta.is_empty());
    }

    #[test]
    fn test_later_markers_overwrite() {
        let meta = parse_match_meta(["|tier|[Gen 8] UU", "Format: [Gen 9] OU"]);
        assert_eq!(meta.format.as_deref(), Some("[Gen 9] OU"));
    }

    #[test]
    fn test_empty_fields_stay_unrecognized() {
        let meta = parse_match_meta(["|win|", "|player|p1||"]);
        assert!(meta.is_empty());
    }

    #[test]
    fn test_merge_keeps_existing_fields() {
        let mut meta = parse_match_meta(["|tier|[Gen 9] OU", "|player|p1|Euic|"]);
        meta.merge(parse_match_meta(["|win|Euic"]));

        assert_eq!(meta.format.as_deref(), Some("[Gen 9] OU"));
        assert_eq!(meta.player1.as_deref(), Some("Euic"));
        assert_eq!(meta.winner.as_deref(), Some("Euic"));
    }

    #[test]
    fn test_result_won_by_normalized_name() {
        let meta = parse_match_meta(["|player|p1|Eddie-Bear!|1|", "|win|eddie bear"]);
        assert_eq!(meta.result(), Some(MatchResult::Won));
        assert_eq!(MatchResult::Won.as_str(), "Won");
    }

    #[test]
    fn test_result_lost() {
        let meta = parse_match_meta([
            "Battle started between Euic and Rival!",
            "Rival won the battle!",
        ]);
        assert_eq!(meta.result(), Some(MatchResult::Lost));
    }

    #[test]
    fn test_result_unknown_winner() {
        let meta = parse_match_meta([
            "Battle started between Euic and Rival!",
            "Somebody else won the battle!",
        ]);
        assert_eq!(meta.result(), None);
    }

    #[test]
    fn test_result_needs_winner_and_player1() {
        assert_eq!(parse_match_meta(["|win|Euic"]).result(), None);
        assert_eq!(parse_match_meta(["|player|p1|Euic|"]).result(), None);
        assert_eq!(MatchMeta::default().result(), None);
    }
}
