//! Interactive menu loop.
//!
//! Collects the auditor's name once, then offers the main menu until
//! the auditor chooses to exit. Starting a comparison walks speaker
//! selection, discovery, scheduling, and the judgment session; every
//! failure along the way is reported and drops back to the menu.

use log::{info, warn};

use crate::config::AppConfig;
use crate::console::Console;
use crate::discovery;
use crate::playback::AudioPlayer;
use crate::schedule;
use crate::session;
use crate::sink::CsvSink;
use crate::{AuditionError, Result};

/// Run the menu loop until the auditor exits.
///
/// `acquire_player` is called once per session so each session gets a
/// fresh output device, and so tests can substitute a scripted player.
pub fn run<C, F>(config: &AppConfig, console: &mut C, mut acquire_player: F) -> Result<()>
where
    C: Console,
    F: FnMut() -> Result<Box<dyn AudioPlayer>>,
{
    println!("=== Audio comparison ===");

    if !config.dataset_root.is_dir() {
        let err = AuditionError::DatasetRootMissing {
            path: config.dataset_root.clone(),
        };
        println!("{}", err);
        return Ok(());
    }

    let auditor = prompt_auditor_name(console)?;

    loop {
        println!("\n=== Main menu ===");
        println!("1. Start comparison");
        println!("2. Exit");

        let choice = console.prompt("Select an action: ")?;
        match choice.trim() {
            "1" => {
                let speaker = select_speaker(config, console)?;
                if let Err(e) =
                    run_one_session(config, console, &mut acquire_player, &speaker, &auditor)
                {
                    if !e.is_session_abort() {
                        return Err(e);
                    }
                    warn!("Session aborted: {}", e);
                    println!("{}", e);
                }
            }
            "2" => {
                println!("Exiting");
                return Ok(());
            }
            _ => println!("Invalid input"),
        }
    }
}

/// Ask for the auditor's name; it labels the results file, so blank
/// names are re-asked.
fn prompt_auditor_name<C: Console>(console: &mut C) -> Result<String> {
    println!("\n=== Auditor details ===");
    loop {
        let name = console.prompt("Enter your name: ")?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        println!("Name cannot be empty.");
    }
}

/// Numbered speaker menu with unbounded revalidation.
fn select_speaker<C: Console>(config: &AppConfig, console: &mut C) -> Result<String> {
    println!("\n=== Speaker selection ===");
    for (index, speaker) in config.speakers.iter().enumerate() {
        println!("{}. {}", index + 1, speaker);
    }

    let count = config.speakers.len();
    loop {
        let line = console.prompt(&format!("Select a speaker (1-{}): ", count))?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(config.speakers[n - 1].clone()),
            Ok(_) => println!("Invalid choice. Try again."),
            Err(_) => println!("Enter a number between 1 and {}.", count),
        }
    }
}

/// Discovery -> scheduling -> judgment for one speaker.
///
/// Anything that prevents the session from running (missing folders,
/// no clips, no output device) errors out to the menu loop, which
/// reports it and carries on.
fn run_one_session<C, F>(
    config: &AppConfig,
    console: &mut C,
    acquire_player: &mut F,
    speaker: &str,
    auditor: &str,
) -> Result<()>
where
    C: Console,
    F: FnMut() -> Result<Box<dyn AudioPlayer>>,
{
    let clips = discovery::scan_speaker(config, speaker)?;

    if clips.synthetic.is_empty() || clips.real.is_empty() {
        println!("No audio files to compare!");
        return Ok(());
    }

    println!(
        "\nFound {} synthetic and {} real audio clips",
        clips.synthetic.len(),
        clips.real.len()
    );

    let mut player = acquire_player()?;

    let pairs = schedule::build_pairs(clips.synthetic, clips.real, &mut rand::thread_rng());
    let results_path = config.results_path(speaker, auditor);
    let mut sink = CsvSink::new(results_path.clone());

    println!("\nStarting comparison for speaker: {}", speaker);
    println!("Number of comparisons: {}", pairs.len());
    println!("Results file: {}", results_path.display());
    println!("{}", "=".repeat(50));

    let summary = session::run_session(&pairs, player.as_mut(), console, &mut sink)?;
    info!(
        "Session for {} done: {} pairs, {} records",
        speaker, summary.pairs_judged, summary.records_written
    );

    Ok(())
}
