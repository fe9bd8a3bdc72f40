use std::env;
use std::process;

use anyhow::Result;
use chatot_replay::{extract_replay_urls, ReplayClient};
use chatot_roster::{classify_event, NicknameSet, OwnerLabel};
use chatot_transcript::{parse_match_meta, ParseState};

#[tokio::main]
async fn main() -> Result<()> {
    let input: Vec<String> = env::args().skip(1).collect();
    if input.is_empty() {
        eprintln!("usage: fetch_replay <replay-url>... [--mine name,name,...]");
        process::exit(2);
    }

    let mut nicknames = NicknameSet::default();
    let mut refs = Vec::new();
    let mut args = input.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--mine" {
            if let Some(names) = args.next() {
                nicknames = NicknameSet::from_fields(&names, "");
            }
        } else {
            refs.push(arg);
        }
    }

    let urls = extract_replay_urls(&refs.join("\n"));
    println!("Fetching {} replay(s)...\n", urls.len());

    let client = ReplayClient::new();
    let batch = client.fetch_batch(urls).await;

    for outcome in &batch.outcomes {
        match &outcome.result {
            Ok(replay) => {
                let mut state = ParseState::new();
                let extraction = replay.extract(&mut state);
                let meta = parse_match_meta(replay.log.lines());

                println!("── {}", replay.url);
                println!(
                    "   {} vs {}  [{}]",
                    meta.player1.as_deref().unwrap_or("?"),
                    meta.player2.as_deref().unwrap_or("?"),
                    meta.format.as_deref().unwrap_or("unknown format"),
                );
                println!(
                    "   {} events over {} lines",
                    extraction.events.len(),
                    extraction.log_lines.len()
                );

                if !nicknames.is_empty() {
                    let mine = extraction
                        .events
                        .iter()
                        .filter(|e| classify_event(e, &nicknames, None) == OwnerLabel::Mine)
                        .count();
                    println!("   {} events attributed to my side", mine);
                }
            }
            Err(error) => println!("── {} failed: {}", outcome.input, error),
        }
    }

    println!("\n{} ok, {} failed of {}", batch.ok(), batch.failed(), batch.total());
    Ok(())
}
