//! Battle log parsing and event extraction for Pokemon Showdown transcripts.
//!
//! This crate turns raw battle log text into structured combat events and
//! retained log lines, regardless of which dialect the text arrived in.
//!
//! # Overview
//!
//! `chatot-transcript` is the bottom layer of the chatot workspace:
//!
//! ```text
//! chatot-transcript (lines -> events + log lines) ← THIS CRATE
//!        │
//!        ├─> chatot-roster (who owns which combatant)
//!        └─> chatot-replay (hosted replay download)
//! ```
//!
//! Two dialects share one entry point:
//!
//! - **protocol lines** are pipe-delimited simulator records
//!   (`|turn|3`, `|move|p1a: Pikachu|Thunderbolt|p2a: Gyarados`, ...)
//! - **narrative lines** are free battle-room text
//!   ("Pikachu used Thunderbolt!", "Gyarados lost 41.2% of its health!")
//!
//! # Main Types
//!
//! - [`Event`] / [`LogLine`] - the extraction output
//! - [`ParseState`] - rolling context the caller persists between calls
//! - [`MatchMeta`] / [`MatchResult`] - match-level metadata and outcome
//!
//! # Example Usage
//!
//! ```
//! use chatot_transcript::{parse_text, ParseState};
//!
//! let mut state = ParseState::new();
//! let extraction = parse_text("Turn 1\nPikachu used Thunderbolt!", &mut state);
//!
//! assert_eq!(state.turn, Some(1));
//! assert_eq!(state.last_move.as_deref(), Some("Thunderbolt"));
//! assert_eq!(extraction.log_lines.len(), 2);
//! ```
//!
//! Parsing is purely functional: every call maps (lines, prior state) to
//! (events, log lines, updated state). Feeding a transcript line by line
//! through a persisted [`ParseState`] produces exactly the same output as
//! feeding it all at once.

pub mod event;
pub mod meta;
pub mod narrative;
pub mod normalize;
pub mod protocol;
pub mod state;
pub mod stream;

// Re-export main types at crate root for convenience
pub use event::{Event, EventKind, LogLine};
pub use meta::{parse_match_meta, MatchMeta, MatchResult};
pub use protocol::SideSlot;
pub use state::ParseState;
pub use stream::{parse_lines, parse_text, Extraction};
