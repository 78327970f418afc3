//! Audio playback behind a narrow blocking interface.
//!
//! The session runner only ever needs "play this clip and return when
//! it has finished". The production implementation drives a rodio sink
//! and polls it until the clip drains; tests substitute a scripted
//! player.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::debug;
use rodio::{Decoder, OutputStream, Sink};

use crate::error::{AuditionError, Result};

/// Synchronous play-to-completion capability.
///
/// Implementations must not return until the clip has finished; the
/// runner relies on this to keep playback and prompting strictly
/// sequential.
pub trait AudioPlayer {
    fn play_blocking(&mut self, path: &Path) -> Result<()>;
}

/// Plays clips through the default output device.
///
/// The output stream must stay alive as long as the sink, so both are
/// held for the player's lifetime (one session).
pub struct RodioPlayer {
    _stream: OutputStream,
    sink: Sink,
    poll_interval: Duration,
}

impl RodioPlayer {
    /// Acquire the default output device.
    ///
    /// Failure here (no device, device busy) aborts the session the
    /// same way a missing clip folder does.
    pub fn new(poll_interval: Duration) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| AuditionError::AudioDeviceUnavailable {
                reason: e.to_string(),
            })?;
        let sink = Sink::try_new(&handle).map_err(|e| AuditionError::AudioDeviceUnavailable {
            reason: e.to_string(),
        })?;

        Ok(Self {
            _stream: stream,
            sink,
            poll_interval,
        })
    }
}

impl AudioPlayer for RodioPlayer {
    fn play_blocking(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|e| AuditionError::AudioOpen {
            path: path.to_path_buf(),
            source: e,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| AuditionError::AudioDecode {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!("Playing {}", path.display());
        self.sink.append(source);

        // Busy-poll until the clip drains; there is no skip.
        while !self.sink.empty() {
            thread::sleep(self.poll_interval);
        }

        Ok(())
    }
}
