//! Extraction output types
//!
//! Events are the structured combat facts pulled out of a transcript; log
//! lines are every retained line, tagged with the turn it was observed under.

use serde::{Deserialize, Serialize};

/// Kind of extracted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A held item was triggered, consumed, or activated.
    Item,
    /// A combatant lost a percentage of its health.
    Damage,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Item => "item",
            EventKind::Damage => "damage",
        }
    }
}

/// One structured event extracted from a transcript line.
///
/// Fields that could not be determined stay `None`; extraction never guesses.
/// Damage magnitudes are health percentages in `[0, 100]`, with
/// `value_low <= value_high` (a single known value sets both ends).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    /// Combatant that caused the event.
    pub actor: Option<String>,
    /// Combatant the event happened to.
    pub target: Option<String>,
    /// Move responsible, when one is known.
    pub move_name: Option<String>,
    /// Turn active when the line was observed.
    pub turn: Option<u32>,
    /// Lower bound of the damage magnitude.
    pub value_low: Option<f64>,
    /// Upper bound of the damage magnitude.
    pub value_high: Option<f64>,
    /// The line the event came from, verbatim.
    pub raw_line: String,
}

impl Event {
    /// Item trigger attributed to `actor`.
    pub fn item(actor: impl Into<String>, turn: Option<u32>, raw_line: impl Into<String>) -> Self {
        Event {
            kind: EventKind::Item,
            actor: Some(actor.into()),
            target: None,
            move_name: None,
            turn,
            value_low: None,
            value_high: None,
            raw_line: raw_line.into(),
        }
    }

    /// Damage event. `values` is reordered so `value_low <= value_high`
    /// always holds on the constructed event.
    pub fn damage(
        actor: Option<String>,
        target: Option<String>,
        move_name: Option<String>,
        turn: Option<u32>,
        values: Option<(f64, f64)>,
        raw_line: impl Into<String>,
    ) -> Self {
        let (value_low, value_high) = match values {
            Some((low, high)) if low > high => (Some(high), Some(low)),
            Some((low, high)) => (Some(low), Some(high)),
            None => (None, None),
        };

        Event {
            kind: EventKind::Damage,
            actor,
            target,
            move_name,
            turn,
            value_low,
            value_high,
            raw_line: raw_line.into(),
        }
    }
}

/// One retained transcript line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogLine {
    /// Turn active when the line was observed, if any turn marker had been
    /// seen yet.
    pub turn: Option<u32>,
    pub raw_line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_event_shape() {
        let event = Event::item("Garchomp", Some(4), "Garchomp's Rocky Helmet hurt Pikachu!");

        assert_eq!(event.kind, EventKind::Item);
        assert_eq!(event.actor.as_deref(), Some("Garchomp"));
        assert_eq!(event.target, None);
        assert_eq!(event.move_name, None);
        assert_eq!(event.turn, Some(4));
        assert_eq!(event.value_low, None);
        assert_eq!(event.value_high, None);
    }

    #[test]
    fn test_damage_values_reordered() {
        let event = Event::damage(None, Some("Pikachu".into()), None, None, Some((52.0, 44.5)), "x");

        assert_eq!(event.value_low, Some(44.5));
        assert_eq!(event.value_high, Some(52.0));
    }

    #[test]
    fn test_damage_single_value_sets_both_ends() {
        let event = Event::damage(None, None, None, Some(2), Some((38.0, 38.0)), "x");

        assert_eq!(event.value_low, Some(38.0));
        assert_eq!(event.value_high, Some(38.0));
    }

    #[test]
    fn test_damage_unknown_values_stay_none() {
        let event = Event::damage(None, Some("Pikachu".into()), None, None, None, "x");

        assert_eq!(event.value_low, None);
        assert_eq!(event.value_high, None);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EventKind::Item).unwrap(), "\"item\"");
        assert_eq!(
            serde_json::to_string(&EventKind::Damage).unwrap(),
            "\"damage\""
        );
        assert_eq!(EventKind::Damage.as_str(), "damage");
    }
}
