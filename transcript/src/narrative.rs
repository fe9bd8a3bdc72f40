//! Narrative line parsers
//!
//! The narrative dialect is free battle-room text. A fixed-priority regex
//! cascade recognizes the line shapes that carry extractable data:
//!
//! 1. `Turn N` markers
//! 2. `X used Move!` attribution updates
//! 3. item triggers (three shapes, first match wins)
//! 4. damage reports (four shapes, most specific first)
//!
//! The item and damage cascades are independent; one line can produce both
//! an item fragment and a damage clause, but never two of either.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::clean_damage_target;

static TURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^Turn\s+(?P<turn>\d+)").unwrap());
static MOVE_USED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?P<actor>.+?) used (?P<move>.+?)!").unwrap());

static ITEM_TRIGGERS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?P<actor>.+?)'s (?P<item>[A-Za-z0-9' -]+?) (?:restored|activated|went|made|triggered)")
            .unwrap(),
        Regex::new(r"(?i)(?P<actor>.+?) had its (?P<item>[A-Za-z0-9' -]+?) (?:restored|activated|used|triggered)")
            .unwrap(),
        Regex::new(r"(?i)(?P<actor>.+?) used its (?P<item>[A-Za-z0-9' -]+?)").unwrap(),
    ]
});

static DAMAGE_RANGE_ATTRIBUTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<target>.+?) lost (?P<low>\d+(?:\.\d+)?)% - (?P<high>\d+(?:\.\d+)?)%.*?from (?P<actor>.+?)'s (?P<move>.+)",
    )
    .unwrap()
});
static DAMAGE_ATTRIBUTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<target>.+?) lost (?P<low>\d+(?:\.\d+)?)%.*?from (?P<actor>.+?)'s (?P<move>.+)")
        .unwrap()
});
static DAMAGE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<target>.+?) lost (?P<low>\d+(?:\.\d+)?)% - (?P<high>\d+(?:\.\d+)?)%").unwrap()
});
static DAMAGE_PLAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<target>.+?) lost (?P<low>\d+(?:\.\d+)?)%(?:\s*\(.*?\))?").unwrap()
});

/// `X used Move!` attribution update. Emits no event; feeds rolling state.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveUsed {
    pub actor: String,
    pub move_name: String,
}

/// A held-item trigger. Only the holder is attributed; item names are too
/// free-form to carry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTrigger {
    pub actor: String,
}

/// A damage report. `actor`/`move_name` are `None` for the unattributed
/// shapes; the caller resolves those against rolling state.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageClause {
    pub target: String,
    pub actor: Option<String>,
    pub move_name: Option<String>,
    pub low: f64,
    pub high: f64,
}

/// Everything one narrative line contributed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NarrativeLine {
    pub turn: Option<u32>,
    pub move_used: Option<MoveUsed>,
    pub item: Option<ItemTrigger>,
    pub damage: Option<DamageClause>,
}

/// Run every cascade over one trimmed narrative line.
pub fn parse_narrative_line(line: &str) -> NarrativeLine {
    NarrativeLine {
        turn: match_turn(line),
        move_used: match_move_used(line),
        item: match_item(line),
        damage: match_damage(line),
    }
}

fn match_turn(line: &str) -> Option<u32> {
    let caps = TURN.captures(line)?;
    caps["turn"].parse().ok()
}

fn match_move_used(line: &str) -> Option<MoveUsed> {
    let caps = MOVE_USED.captures(line)?;
    Some(MoveUsed {
        actor: caps["actor"].trim().to_string(),
        move_name: caps["move"].trim().to_string(),
    })
}

fn match_item(line: &str) -> Option<ItemTrigger> {
    ITEM_TRIGGERS.iter().find_map(|pattern| {
        let caps = pattern.captures(line)?;
        Some(ItemTrigger {
            actor: caps["actor"].trim().to_string(),
        })
    })
}

/// Damage cascade, most specific shape first. A line matching an attributed
/// shape never falls through to a bare one.
fn match_damage(line: &str) -> Option<DamageClause> {
    match_range_attributed(line)
        .or_else(|| match_attributed(line))
        .or_else(|| match_range(line))
        .or_else(|| match_plain(line))
}

fn match_range_attributed(line: &str) -> Option<DamageClause> {
    let caps = DAMAGE_RANGE_ATTRIBUTED.captures(line)?;
    Some(DamageClause {
        target: clean_damage_target(&caps["target"]),
        actor: Some(caps["actor"].trim().to_string()),
        move_name: Some(caps["move"].trim().to_string()),
        low: caps["low"].parse().ok()?,
        high: caps["high"].parse().ok()?,
    })
}

fn match_attributed(line: &str) -> Option<DamageClause> {
    let caps = DAMAGE_ATTRIBUTED.captures(line)?;
    let pct: f64 = caps["low"].parse().ok()?;
    Some(DamageClause {
        target: clean_damage_target(&caps["target"]),
        actor: Some(caps["actor"].trim().to_string()),
        move_name: Some(caps["move"].trim().to_string()),
        low: pct,
        high: pct,
    })
}

fn match_range(line: &str) -> Option<DamageClause> {
    let caps = DAMAGE_RANGE.captures(line)?;
    Some(DamageClause {
        target: clean_damage_target(&caps["target"]),
        actor: None,
        move_name: None,
        low: caps["low"].parse().ok()?,
        high: caps["high"].parse().ok()?,
    })
}

fn match_plain(line: &str) -> Option<DamageClause> {
    let caps = DAMAGE_PLAIN.captures(line)?;
    let pct: f64 = caps["low"].parse().ok()?;
    Some(DamageClause {
        target: clean_damage_target(&caps["target"]),
        actor: None,
        move_name: None,
        low: pct,
        high: pct,
    })
}
