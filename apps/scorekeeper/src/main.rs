//! Frame-replay binary: drives the scorekeeper from recorded detection
//! frames instead of a live camera.
//!
//! Reads one JSON array per stdin line; each element is either a bare card
//! token (`"h9"`) or an object `{"card": "h9", "confidence": 0.93}`. Bare
//! tokens count as full-confidence sightings. When the deal completes the
//! score table and leading scorer(s) are printed as JSON.

use std::io::{self, BufRead};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use scorekeeper::domain::scoring;
use scorekeeper::{AppError, Card, Detection, FeedConfig, Scorekeeper, Suit};

/// JSON logs on stderr; level via `RUST_LOG`, `info` by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_current_span(false)
        .init();
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FrameEntry {
    Token(Card),
    Scored { card: Card, confidence: f32 },
}

impl FrameEntry {
    fn to_detection(&self) -> Detection {
        match *self {
            FrameEntry::Token(card) => Detection::new(card, 1.0),
            FrameEntry::Scored { card, confidence } => Detection::new(card, confidence),
        }
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: scorekeeper <trump: s|h|e|l> <players: 2-6>");
        std::process::exit(2);
    }
    let trump = match args[1].to_lowercase().parse::<Suit>() {
        Ok(trump) => trump,
        Err(e) => {
            eprintln!("invalid trump suit: {e}");
            std::process::exit(2);
        }
    };
    let player_count = match args[2].parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid player count: {}", args[2]);
            std::process::exit(2);
        }
    };

    let config = match FeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(trump, player_count, config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(trump: Suit, player_count: usize, config: FeedConfig) -> Result<(), AppError> {
    let mut keeper = Scorekeeper::new(config);
    keeper.start_deal(player_count, trump)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entries: Vec<FrameEntry> = serde_json::from_str(&line)
            .map_err(|e| AppError::input(format!("bad frame line: {e}")))?;
        let detections: Vec<Detection> = entries.iter().map(FrameEntry::to_detection).collect();
        keeper.ingest_frame(&detections)?;
        if keeper.is_deal_over() {
            break;
        }
    }

    let table = serde_json::to_string(&keeper.score_table())
        .map_err(|e| AppError::input(format!("serialize score table: {e}")))?;
    println!("{table}");
    let leaders: Vec<String> = keeper
        .leading_scorers()
        .into_iter()
        .map(scoring::seat_label)
        .collect();
    println!("leading: {}", leaders.join(", "));
    Ok(())
}
