use std::env;
use std::fs;

use chatot_transcript::{parse_match_meta, parse_text, ParseState};

const SAMPLE: &str = "\
|player|p1|Euic|169|
|player|p2|Rival|266|
|tier|[Gen 9] OU
|turn|1
|move|p1a: Eddie bear|Close Combat|p2a: Weezing
|switch|p2a: Weezing|Weezing, M|100/100
|-damage|p2a: Weezing|62/100
Turn 2
Eddie bear used Ice Punch!
The opposing Weezing lost 21.0% of its health!
Giraffe's Leftovers restored a little HP!
|win|Euic";

fn main() -> std::io::Result<()> {
    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let mut state = ParseState::new();
    let extraction = parse_text(&text, &mut state);
    let meta = parse_match_meta(text.lines());

    println!("=== Match ===");
    println!("format:  {}", meta.format.as_deref().unwrap_or("?"));
    println!(
        "players: {} vs {}",
        meta.player1.as_deref().unwrap_or("?"),
        meta.player2.as_deref().unwrap_or("?")
    );
    match (meta.winner.as_deref(), meta.result()) {
        (Some(winner), Some(result)) => println!("winner:  {} ({})", winner, result.as_str()),
        (Some(winner), None) => println!("winner:  {}", winner),
        _ => println!("winner:  ?"),
    }

    println!("\n=== Events ({}) ===", extraction.events.len());
    for event in &extraction.events {
        let turn = event
            .turn
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        let values = match (event.value_low, event.value_high) {
            (Some(low), Some(high)) if low == high => format!(" {:.1}%", low),
            (Some(low), Some(high)) => format!(" {:.1}%-{:.1}%", low, high),
            _ => String::new(),
        };

        println!(
            "turn {:>2}  {:<6} {} -> {}{} ({})",
            turn,
            event.kind.as_str(),
            event.actor.as_deref().unwrap_or("?"),
            event.target.as_deref().unwrap_or("-"),
            values,
            event.move_name.as_deref().unwrap_or("-"),
        );
    }

    println!("\n{} lines retained", extraction.log_lines.len());
    Ok(())
}
