//! Hosted replay download and transcript extraction.
//!
//! Replay pages on the ladder host expose their battle log as JSON at
//! `<replay-url>.json`, with the raw transcript under a `log` field. This
//! crate turns free-form user input (a pasted URL, a whole replays.txt
//! dump) into normalized JSON URLs, downloads them, and hands each
//! transcript to `chatot-transcript` for extraction.
//!
//! ```ignore
//! use chatot_replay::ReplayClient;
//! use chatot_transcript::ParseState;
//!
//! let client = ReplayClient::new();
//! let replay = client
//!     .fetch("https://replay.pokemonshowdown.com/gen9ou-12345")
//!     .await?;
//!
//! let mut state = ParseState::new();
//! let extraction = replay.extract(&mut state);
//! println!("{}: {} events", replay.url, extraction.events.len());
//! ```
//!
//! Failures are per replay, never fatal: a bad URL in a batch is reported
//! alongside the successes, the way a dropped line is reported inside the
//! extraction engine.

mod fetch;
mod url;

pub use fetch::{ReplayBatch, ReplayClient, ReplayError, ReplayLog, ReplayOutcome};
pub use url::{extract_replay_urls, normalize_replay_url, strip_json_suffix};
