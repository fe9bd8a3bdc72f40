//! Line routing and the extraction loop
//!
//! One entry point serves every ingestion path: batch parsing a whole
//! transcript, the streaming path that feeds single lines as a log file
//! grows, and bulk parsing of downloaded replays. The only difference
//! between them is who holds the [`ParseState`] in between.

use crate::event::{Event, LogLine};
use crate::narrative;
use crate::protocol::{self, Fragment};
use crate::state::ParseState;

/// Everything one parse call produced. The updated [`ParseState`] lives in
/// the `&mut` the caller passed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub events: Vec<Event>,
    pub log_lines: Vec<LogLine>,
}

/// Parse a sequence of raw lines against prior state.
///
/// Each line is trimmed; empty lines disappear entirely (no [`LogLine`]).
/// A line starting with the field separator routes to the protocol parser,
/// anything else to the narrative cascade. Every retained line lands in
/// `log_lines` tagged with the turn in effect after the line itself was
/// applied, so a turn marker is filed under its own turn.
///
/// Feeding lines one call at a time with the same `state` threaded through
/// yields the same events, log lines, and final state as one batch call.
pub fn parse_lines<'a, I>(lines: I, state: &mut ParseState) -> Extraction
where
    I: IntoIterator<Item = &'a str>,
{
    let mut extraction = Extraction::default();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('|') {
            apply_protocol_line(line, state, &mut extraction.events);
        } else {
            apply_narrative_line(line, state, &mut extraction.events);
        }

        extraction.log_lines.push(LogLine {
            turn: state.turn,
            raw_line: line.to_string(),
        });
    }

    extraction
}

/// Parse a whole transcript held in one string.
pub fn parse_text(text: &str, state: &mut ParseState) -> Extraction {
    parse_lines(text.lines(), state)
}

fn apply_protocol_line(line: &str, state: &mut ParseState, events: &mut Vec<Event>) {
    match protocol::parse_protocol_line(line) {
        Some(Fragment::Turn(turn)) => state.turn = Some(turn),
        Some(Fragment::Move {
            actor, move_name, ..
        }) => {
            // Empty fields never clobber a known attacker.
            if !actor.is_empty() {
                state.last_actor = Some(actor);
            }
            if !move_name.is_empty() {
                state.last_move = Some(move_name);
            }
        }
        Some(Fragment::HpBaseline { key, pct }) => state.record_hp(&key, pct),
        Some(Fragment::Damage { target, key, pct }) => {
            let values = state.damage_from_hp(&key, pct).map(|pct| (pct, pct));
            events.push(Event::damage(
                state.last_actor.clone(),
                Some(target),
                state.last_move.clone(),
                state.turn,
                values,
                line,
            ));
        }
        None => {}
    }
}

fn apply_narrative_line(line: &str, state: &mut ParseState, events: &mut Vec<Event>) {
    let parsed = narrative::parse_narrative_line(line);

    if let Some(turn) = parsed.turn {
        state.turn = Some(turn);
    }
    if let Some(used) = parsed.move_used {
        state.last_actor = Some(used.actor);
        state.last_move = Some(used.move_name);
    }
    if let Some(item) = parsed.item {
        events.push(Event::item(item.actor, state.turn, line));
    }
    if let Some(clause) = parsed.damage {
        let actor = clause.actor.or_else(|| state.last_actor.clone());
        let move_name = clause.move_name.or_else(|| state.last_move.clone());
        events.push(Event::damage(
            actor,
            Some(clause.target),
            move_name,
            state.turn,
            Some((clause.low, clause.high)),
            line,
        ));
    }
}
