//! The interactive judgment session.
//!
//! For each scheduled pair the runner plays both clips to completion,
//! asks which one was real (with repeat-playback on request), appends
//! the two resulting rows, and persists the full table before moving
//! on. Playback and persistence failures are reported and survived;
//! only a closed console ends the session early.

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::console::Console;
use crate::discovery::Origin;
use crate::playback::AudioPlayer;
use crate::schedule::ComparisonPair;
use crate::sink::{JudgmentRecord, ResultSink};
use crate::Result;

/// What the auditor typed at the judgment prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JudgmentInput {
    FirstIsReal,
    SecondIsReal,
    Repeat,
}

/// Parse a judgment response. Case-insensitive, whitespace-tolerant;
/// anything unrecognized means "ask again".
fn parse_judgment(line: &str) -> Option<JudgmentInput> {
    match line.trim().to_lowercase().as_str() {
        "1" => Some(JudgmentInput::FirstIsReal),
        "2" => Some(JudgmentInput::SecondIsReal),
        "p" => Some(JudgmentInput::Repeat),
        _ => None,
    }
}

/// Totals reported when a session completes.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub pairs_judged: usize,
    pub records_written: usize,
    pub results_path: std::path::PathBuf,
    pub started_at: DateTime<Utc>,
}

/// Run every scheduled pair to judgment.
///
/// Returns when all pairs are judged; the results table has been
/// persisted after each one. The accumulated rows live and die with
/// this call; nothing carries over to the next session.
pub fn run_session(
    pairs: &[ComparisonPair],
    player: &mut dyn AudioPlayer,
    console: &mut dyn Console,
    sink: &mut dyn ResultSink,
) -> Result<SessionSummary> {
    let started_at = Utc::now();
    let total = pairs.len();
    let mut results: Vec<JudgmentRecord> = Vec::new();

    info!("Session started: {} comparisons", total);

    for (index, pair) in pairs.iter().enumerate() {
        println!("\n--- Comparison {}/{} ---", index + 1, total);
        play_pair(player, pair);

        loop {
            println!("\nWhich clip is real?");
            println!("1 - First clip");
            println!("2 - Second clip");
            println!("p - Replay both clips");

            let line = console.prompt("Your choice: ")?;

            match parse_judgment(&line) {
                Some(JudgmentInput::Repeat) => {
                    println!("Replaying...");
                    play_pair(player, pair);
                }
                Some(input) => {
                    record_judgment(&mut results, pair, input);
                    match sink.persist(&results) {
                        Ok(()) => println!("Result saved"),
                        Err(e) => {
                            // Keep going: the rows stay in memory and the
                            // next successful save covers this one too.
                            warn!("Persisting results failed: {}", e);
                            println!("Could not save results: {}", e);
                        }
                    }
                    break;
                }
                None => println!("Invalid input. Enter 1, 2 or p."),
            }
        }
    }

    println!("\nAll comparisons complete!");
    println!("Final results saved to: {}", sink.location().display());
    println!("Total records: {}", results.len());
    info!(
        "Session complete in {}s",
        (Utc::now() - started_at).num_seconds()
    );

    Ok(SessionSummary {
        pairs_judged: total,
        records_written: results.len(),
        results_path: sink.location().to_path_buf(),
        started_at,
    })
}

/// Append the two rows for a judged pair, in presentation order.
///
/// The clip the auditor marked gets "Real" and the other gets
/// "Synthetic" no matter what either clip actually is.
fn record_judgment(results: &mut Vec<JudgmentRecord>, pair: &ComparisonPair, input: JudgmentInput) {
    let first_choice = match input {
        JudgmentInput::FirstIsReal => Origin::Real,
        JudgmentInput::SecondIsReal => Origin::Synthetic,
        JudgmentInput::Repeat => unreachable!("repeat never records"),
    };

    results.push(JudgmentRecord {
        audio_file: pair.first.name.clone(),
        true_origin: pair.first.origin,
        auditor_choice: first_choice,
    });
    results.push(JudgmentRecord {
        audio_file: pair.second.name.clone(),
        true_origin: pair.second.origin,
        auditor_choice: first_choice.opposite(),
    });
}

/// Play both clips of a pair in presentation order.
///
/// A failed clip is reported and skipped; the judgment prompt still
/// follows so the session keeps moving.
fn play_pair(player: &mut dyn AudioPlayer, pair: &ComparisonPair) {
    println!("Playing the first clip...");
    if let Err(e) = player.play_blocking(&pair.first.path()) {
        warn!("Playback failed: {}", e);
        println!("Playback error: {}", e);
    }

    println!("Playing the second clip...");
    if let Err(e) = player.play_blocking(&pair.second.path()) {
        warn!("Playback failed: {}", e);
        println!("Playback error: {}", e);
    }
}
