//! Audition CLI - Blind A/B Listening Audit
//!
//! Interactive entry point: initializes logging, builds the fixed run
//! configuration, and hands control to the menu loop.

use env_logger::Env;
use log::info;

use audition::cli;
use audition::config::AppConfig;
use audition::console::StdConsole;
use audition::playback::{AudioPlayer, RodioPlayer};
use audition::Result;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    let poll_interval = config.poll_interval;

    info!("Audition v{}", env!("CARGO_PKG_VERSION"));

    let mut console = StdConsole;
    cli::run(&config, &mut console, || {
        let player = RodioPlayer::new(poll_interval)?;
        Ok(Box::new(player) as Box<dyn AudioPlayer>)
    })
}
