//! Protocol line parsers
//!
//! Protocol lines are pipe-delimited simulator records: `|TAG|FIELD|FIELD`.
//! Only the tags that feed event extraction are decoded here; every other
//! tag is retained as a log line upstream and otherwise ignored.
//!
//! A malformed line (missing fields, unreadable numbers) never errors. It
//! decodes to nothing and stays in the log untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::{clean_damage_target, strip_slot_prefix};

static HP_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<pct>\d+(?:\.\d+)?)%").unwrap());
static HP_RATIO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<hp>\d+(?:\.\d+)?)\s*/\s*(?P<max>\d+(?:\.\d+)?)").unwrap());

/// Battle slot as it appears in slot tokens and `|player|` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideSlot {
    P1,
    P2,
}

impl SideSlot {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(SideSlot::P1),
            "p2" => Some(SideSlot::P2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideSlot::P1 => "p1",
            SideSlot::P2 => "p2",
        }
    }
}

/// Decoded contribution of one protocol line, before rolling state is
/// consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// `|turn|N` - the active turn changed.
    Turn(u32),
    /// `|move|ACTOR|MOVE|TARGET` - updates the rolling attacker, emits no
    /// event of its own.
    Move {
        actor: String,
        move_name: String,
        target: Option<String>,
    },
    /// `|switch`/`|drag`/`|replace` - a fresh health baseline for `key`.
    HpBaseline { key: String, pct: f64 },
    /// `|-damage|KEY|HP` - health dropped; the magnitude comes from the
    /// baseline tracked under `key`.
    Damage {
        /// Display name, slot prefix and "opposing" wording removed.
        target: String,
        /// Raw combatant field, the health-tracking key.
        key: String,
        pct: f64,
    },
}

/// Parse one protocol line into at most one [`Fragment`].
pub fn parse_protocol_line(line: &str) -> Option<Fragment> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return None;
    }

    match parts[1] {
        "turn" => parse_turn(&parts),
        "move" => parse_move(&parts),
        "switch" | "drag" | "replace" => parse_hp_baseline(&parts),
        "-damage" => parse_damage(&parts),
        _ => None,
    }
}

/// Parse |turn|NUMBER
fn parse_turn(parts: &[&str]) -> Option<Fragment> {
    let turn = parts.get(2)?.trim().parse().ok()?;
    Some(Fragment::Turn(turn))
}

/// Parse |move|POKEMON|MOVE|TARGET with the target optional
fn parse_move(parts: &[&str]) -> Option<Fragment> {
    if parts.len() < 4 {
        return None;
    }
    let actor = strip_slot_prefix(parts[2]).to_string();
    let move_name = parts[3].trim().to_string();
    let target = parts.get(4).map(|s| strip_slot_prefix(s).to_string());

    Some(Fragment::Move {
        actor,
        move_name,
        target,
    })
}

/// Parse |switch|POKEMON|DETAILS|HP STATUS (also |drag and |replace)
fn parse_hp_baseline(parts: &[&str]) -> Option<Fragment> {
    if parts.len() < 5 {
        return None;
    }
    let key = parts[2].trim().to_string();
    let pct = parse_hp_percent(parts[4])?;

    Some(Fragment::HpBaseline { key, pct })
}

/// Parse |-damage|POKEMON|HP STATUS
fn parse_damage(parts: &[&str]) -> Option<Fragment> {
    if parts.len() < 4 {
        return None;
    }
    let key = parts[2].trim().to_string();
    let target = clean_damage_target(strip_slot_prefix(parts[2]));
    let pct = parse_hp_percent(parts[3])?;

    Some(Fragment::Damage { target, key, pct })
}

/// Parse HP text to a percentage.
///
/// A literal percentage ("62%", "41.5% tox") is taken as-is; otherwise a
/// current/max ratio ("147/234 par") is scaled to percent. Text with
/// neither form, or a non-positive max, parses to `None` - "0 fnt" is the
/// common case.
pub fn parse_hp_percent(text: &str) -> Option<f64> {
    if let Some(caps) = HP_PERCENT.captures(text) {
        return caps["pct"].parse().ok();
    }

    let caps = HP_RATIO.captures(text)?;
    let current: f64 = caps["hp"].parse().ok()?;
    let max: f64 = caps["max"].parse().ok()?;
    if max > 0.0 {
        Some(current / max * 100.0)
    } else {
        None
    }
}
