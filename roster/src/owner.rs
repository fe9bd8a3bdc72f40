//! Combatant-to-side classification

use chatot_transcript::normalize::normalize_name;
use chatot_transcript::{Event, SideSlot};
use serde::{Deserialize, Serialize};

use crate::nicknames::NicknameSet;
use crate::sides::detect_side_token;

/// Side believed to control a named combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerLabel {
    Mine,
    Opponent,
    Unknown,
}

impl OwnerLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerLabel::Mine => "mine",
            OwnerLabel::Opponent => "opponent",
            OwnerLabel::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != OwnerLabel::Unknown
    }
}

/// Classify a piece of transcript text: a combatant name, or a whole raw
/// line.
///
/// Checks run in order and the first conclusive one wins:
///
/// 1. "opposing"/"foe" wording always means the opponent, whatever the
///    nicknames say.
/// 2. With `my_side` resolved, a slot token in the text decides directly.
/// 3. Nickname substring match against normalized text, the "mine" list
///    before "opponent". When both sides registered the same name, mine
///    wins; deliberate tie-break, not an artifact.
/// 4. Otherwise [`OwnerLabel::Unknown`]. Classification never guesses.
pub fn classify(text: &str, nicknames: &NicknameSet, my_side: Option<SideSlot>) -> OwnerLabel {
    if text.is_empty() {
        return OwnerLabel::Unknown;
    }

    let normalized = normalize_name(text);
    if normalized.contains("opposing") || normalized.contains("foe") {
        return OwnerLabel::Opponent;
    }

    if let Some(my_side) = my_side {
        if let Some(slot) = detect_side_token(&normalized) {
            return if slot == my_side {
                OwnerLabel::Mine
            } else {
                OwnerLabel::Opponent
            };
        }
    }

    let sides = [
        (OwnerLabel::Mine, &nicknames.mine),
        (OwnerLabel::Opponent, &nicknames.opponent),
    ];
    for (label, names) in sides {
        for name in names {
            let needle = normalize_name(name);
            if !needle.is_empty() && normalized.contains(&needle) {
                return label;
            }
        }
    }

    OwnerLabel::Unknown
}

/// Classify an extracted event.
///
/// The actor is consulted first, then the target, then the raw line. Only
/// the raw line gets `my_side`: extracted names have their slot prefixes
/// stripped, raw protocol lines still carry them.
pub fn classify_event(
    event: &Event,
    nicknames: &NicknameSet,
    my_side: Option<SideSlot>,
) -> OwnerLabel {
    let by_actor = classify(event.actor.as_deref().unwrap_or(""), nicknames, None);
    if by_actor.is_known() {
        return by_actor;
    }

    let by_target = classify(event.target.as_deref().unwrap_or(""), nicknames, None);
    if by_target.is_known() {
        return by_target;
    }

    classify(&event.raw_line, nicknames, my_side)
}
