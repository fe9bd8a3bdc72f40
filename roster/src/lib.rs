//! Combatant ownership and side attribution for recorded battles.
//!
//! `chatot-roster` sits above `chatot-transcript`: it never parses battle
//! lines itself, it decides which side of the match an already-extracted
//! name belongs to.
//!
//! ```text
//! chatot-transcript (lines -> events + log lines)
//!        │
//!        ▼
//! chatot-roster (who owns which combatant) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`NicknameSet`] - the names the recording player registered per side
//! - [`OwnerLabel`] - mine / opponent / unknown
//! - [`classify`] / [`classify_event`] - label text or a whole event
//! - [`infer_my_side`] - guess which protocol slot belongs to the recorder
//!
//! Attribution is best effort. Everything here degrades to
//! [`OwnerLabel::Unknown`] (or `None`) instead of guessing.

pub mod nicknames;
pub mod owner;
pub mod sides;

// Re-export main types at crate root for convenience
pub use nicknames::{split_name_field, NicknameSet};
pub use owner::{classify, classify_event, OwnerLabel};
pub use sides::infer_my_side;

// Re-export the slot type roster functions speak in terms of
pub use chatot_transcript::SideSlot;
