//! Persistence of the judgment table.
//!
//! The sink rewrites the complete table on every call, so the on-disk
//! file always matches the in-memory results as of the last completed
//! judgment. Killing the process between judgments loses at most one
//! pair.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::discovery::Origin;
use crate::error::{AuditionError, Result};

/// One row of the results table: a single clip of a judged pair.
///
/// `auditor_choice` records what the auditor said, never reconciled
/// with `true_origin`. The disagreement between the two columns is
/// the measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    pub audio_file: String,
    pub true_origin: Origin,
    pub auditor_choice: Origin,
}

/// Destination for the accumulated judgment table.
pub trait ResultSink {
    /// Replace the persisted table with `records`, in order.
    fn persist(&mut self, records: &[JudgmentRecord]) -> Result<()>;

    /// Where the table ends up, for reporting to the auditor.
    fn location(&self) -> &Path;
}

/// Writes the table as CSV with a header row.
///
/// The file is created on the first persist call, not before, so a
/// session that never completes a judgment leaves nothing on disk.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ResultSink for CsvSink {
    fn persist(&mut self, records: &[JudgmentRecord]) -> Result<()> {
        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|e| AuditionError::ResultsWrite {
                path: self.path.clone(),
                source: e,
            })?;

        for record in records {
            writer
                .serialize(record)
                .map_err(|e| AuditionError::ResultsWrite {
                    path: self.path.clone(),
                    source: e,
                })?;
        }

        writer.flush().map_err(|e| AuditionError::ResultsWrite {
            path: self.path.clone(),
            source: csv::Error::from(e),
        })?;

        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
