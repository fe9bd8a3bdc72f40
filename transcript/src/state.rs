//! Rolling parse state
//!
//! The engine itself holds no memory: callers persist a [`ParseState`] per
//! match (in whatever store they use) and pass it back in with each chunk of
//! lines. Serialization round-trips through serde, so state written out
//! after one call and read back before the next behaves as if it never left
//! the process.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Minimal context carried across transcript lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseState {
    /// Turn in effect for the next observed line.
    pub turn: Option<u32>,
    /// Actor of the most recent move line, in either dialect.
    pub last_actor: Option<String>,
    /// Name of the most recent move used, in either dialect.
    pub last_move: Option<String>,
    /// Last-known health percentage per combatant key (0-100).
    ///
    /// Keys are the raw combatant fields from protocol lines, slot prefix
    /// included, so "p1a: Pikachu" and "p2a: Pikachu" never collide.
    #[serde(default)]
    pub hp_pct: HashMap<String, f64>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh health reading without deriving damage. Used for
    /// switch-in style lines that establish a baseline.
    pub fn record_hp(&mut self, key: &str, pct: f64) {
        self.hp_pct.insert(key.to_string(), pct);
    }

    /// Record a post-damage health reading and return the drop since the
    /// previous reading for this key.
    ///
    /// Returns `None` on the first observation of a key; without a baseline
    /// the magnitude is unknowable. Healing between readings clamps to zero
    /// rather than going negative.
    pub fn damage_from_hp(&mut self, key: &str, pct: f64) -> Option<f64> {
        let previous = self.hp_pct.insert(key.to_string(), pct);
        previous.map(|prev| (prev - pct).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_has_no_magnitude() {
        let mut state = ParseState::new();

        assert_eq!(state.damage_from_hp("p2a: Weezing", 62.0), None);
        assert_eq!(state.hp_pct.get("p2a: Weezing"), Some(&62.0));
    }

    #[test]
    fn test_magnitude_is_drop_since_previous_reading() {
        let mut state = ParseState::new();
        state.record_hp("p2a: Weezing", 100.0);

        assert_eq!(state.damage_from_hp("p2a: Weezing", 62.0), Some(38.0));
        assert_eq!(state.damage_from_hp("p2a: Weezing", 12.5), Some(49.5));
    }

    #[test]
    fn test_healing_clamps_to_zero() {
        let mut state = ParseState::new();
        state.record_hp("p1a: Blissey", 40.0);

        assert_eq!(state.damage_from_hp("p1a: Blissey", 90.0), Some(0.0));
    }

    #[test]
    fn test_keys_keep_slot_prefix_distinct() {
        let mut state = ParseState::new();
        state.record_hp("p1a: Ditto", 100.0);
        state.record_hp("p2a: Ditto", 50.0);

        assert_eq!(state.damage_from_hp("p2a: Ditto", 25.0), Some(25.0));
        assert_eq!(state.hp_pct.get("p1a: Ditto"), Some(&100.0));
    }

    #[test]
    fn test_serde_round_trip_preserves_state() {
        let mut state = ParseState::new();
        state.turn = Some(7);
        state.last_actor = Some("Pikachu".to_string());
        state.last_move = Some("Thunderbolt".to_string());
        state.record_hp("p2a: Gyarados", 81.5);

        let json = serde_json::to_string(&state).unwrap();
        let restored: ParseState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn test_missing_hp_map_defaults_empty() {
        // State rows written before health tracking existed lack the map.
        let restored: ParseState =
            serde_json::from_str(r#"{"turn":3,"last_actor":null,"last_move":"Surf"}"#).unwrap();

        assert_eq!(restored.turn, Some(3));
        assert_eq!(restored.last_move.as_deref(), Some("Surf"));
        assert!(restored.hp_pct.is_empty());
    }
}
