//! Audition - Blind A/B Listening Audit
//!
//! Presents a human auditor with pairs of audio clips (one synthesized,
//! one genuine, in randomized order), records which clip the auditor
//! believes is real, and rewrites the accumulated judgment table to a
//! CSV file after every answer.
//!
//! # Architecture
//!
//! - `discovery` lists a speaker's clips from the dataset folders
//! - `schedule` shuffles and pairs them with randomized presentation order
//! - `session` drives the play/prompt/record loop
//! - `sink` persists the judgment table after every pair
//! - `cli` is the interactive menu wrapped around it all
//!
//! Audio playback and console I/O sit behind the `playback` and
//! `console` traits so the whole flow runs in tests without a sound
//! card or a terminal.

pub mod cli;
pub mod config;
pub mod console;
pub mod discovery;
pub mod error;
pub mod playback;
pub mod schedule;
pub mod session;
pub mod sink;

pub use error::{AuditionError, Result};
