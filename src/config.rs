//! Immutable run configuration.
//!
//! The roster, dataset layout, and playback poll interval are fixed for
//! the lifetime of a run and passed down from `main` rather than read
//! from ambient globals.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default dataset root, relative to the working directory.
const DEFAULT_DATASET_ROOT: &str = "Dataset";

/// Default speaker roster.
const DEFAULT_SPEAKERS: &[&str] = &["Artem", "Grisha", "Nicolay"];

/// Recognized audio file extensions (case-sensitive suffix match).
const DEFAULT_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "flac"];

/// Interval between playback-completion polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for one run of the audit tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root directory holding one subdirectory per speaker.
    pub dataset_root: PathBuf,

    /// Speakers offered in the selection menu, in display order.
    pub speakers: Vec<String>,

    /// File extensions treated as playable clips.
    pub extensions: Vec<String>,

    /// Poll interval while waiting for a clip to finish.
    pub poll_interval: Duration,

    /// Directory the results table is written to.
    pub results_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from(DEFAULT_DATASET_ROOT),
            speakers: DEFAULT_SPEAKERS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            results_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Directory holding a speaker's clip folders.
    pub fn speaker_dir(&self, speaker: &str) -> PathBuf {
        self.dataset_root.join(speaker)
    }

    /// Results file for a (speaker, auditor) pair. The same inputs
    /// always map to the same file, so a re-run of the session
    /// overwrites the previous table.
    pub fn results_path(&self, speaker: &str, auditor: &str) -> PathBuf {
        self.results_dir
            .join(format!("results_{}_{}.csv", speaker, auditor))
    }

    /// Whether a file name ends with one of the recognized extensions.
    pub fn is_audio_file(&self, name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| name.ends_with(&format!(".{}", ext)))
    }

    /// Convenience for tests and callers that relocate the dataset.
    pub fn with_dataset_root(mut self, root: &Path) -> Self {
        self.dataset_root = root.to_path_buf();
        self
    }
}
