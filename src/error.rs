//! Error types for the listening audit tool.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for audit operations.
pub type Result<T> = std::result::Result<T, AuditionError>;

/// Errors that can occur while running a listening audit.
///
/// Most of these are reported to the auditor and abort a single
/// operation, not the process; only end-of-input on the console
/// unwinds past the menu loop.
#[derive(Error, Debug)]
pub enum AuditionError {
    // Dataset Errors
    #[error("Dataset folder not found: {path}")]
    DatasetRootMissing { path: PathBuf },

    #[error("Speaker folder not found: {path}")]
    SpeakerFolderMissing { path: PathBuf },

    #[error("Failed to read folder: {path}: {source}")]
    FolderRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Playback Errors
    #[error("No audio output device available: {reason}")]
    AudioDeviceUnavailable { reason: String },

    #[error("Failed to open audio file: {path}: {source}")]
    AudioOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode audio file: {path}: {source}")]
    AudioDecode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    // Persistence Errors
    #[error("Failed to write results: {path}: {source}")]
    ResultsWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // Console Errors
    #[error("Console input closed")]
    ConsoleClosed,

    // Generic Errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditionError {
    /// Returns true if this error aborts a single session or save
    /// attempt while leaving the menu loop running.
    pub fn is_session_abort(&self) -> bool {
        !matches!(self, AuditionError::ConsoleClosed)
    }
}
