//! Clip discovery for a speaker's dataset folders.
//!
//! Each speaker directory holds two clip folders: `Syntes` with the
//! synthesized recordings and `Real` with the genuine ones. Discovery
//! lists the playable files in both and reports a missing folder as a
//! typed error so the caller can abort the session gracefully.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::config::AppConfig;
use crate::error::{AuditionError, Result};

/// Folder name holding synthesized clips inside a speaker directory.
pub const SYNTHETIC_DIR_NAME: &str = "Syntes";

/// Folder name holding genuine clips inside a speaker directory.
pub const REAL_DIR_NAME: &str = "Real";

/// True origin of a clip, and also the label an auditor assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    Synthetic,
    Real,
}

impl Origin {
    /// The complementary label.
    pub fn opposite(self) -> Origin {
        match self {
            Origin::Synthetic => Origin::Real,
            Origin::Real => Origin::Synthetic,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Synthetic => write!(f, "Synthetic"),
            Origin::Real => write!(f, "Real"),
        }
    }
}

/// A playable clip, identified by file name and owning folder.
/// Immutable once discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    /// File name within the folder, extension included.
    pub name: String,
    /// Folder the clip lives in.
    pub dir: PathBuf,
    /// Which of the two clip folders it came from.
    pub origin: Origin,
}

impl AudioFile {
    /// Full path to the clip on disk.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Everything discovery knows about one speaker's clips.
#[derive(Debug, Clone)]
pub struct SpeakerClips {
    pub synthetic: Vec<AudioFile>,
    pub real: Vec<AudioFile>,
    pub synthetic_dir: PathBuf,
    pub real_dir: PathBuf,
}

/// Locate and list both clip folders for a speaker.
///
/// Either folder missing is an error; an empty folder is not. File
/// names are sorted so that everything downstream of the shuffle is
/// platform-independent.
pub fn scan_speaker(config: &AppConfig, speaker: &str) -> Result<SpeakerClips> {
    let speaker_dir = config.speaker_dir(speaker);
    let synthetic_dir = speaker_dir.join(SYNTHETIC_DIR_NAME);
    let real_dir = speaker_dir.join(REAL_DIR_NAME);

    for dir in [&synthetic_dir, &real_dir] {
        if !dir.is_dir() {
            return Err(AuditionError::SpeakerFolderMissing { path: dir.clone() });
        }
    }

    let synthetic = list_clips(config, &synthetic_dir, Origin::Synthetic)?;
    let real = list_clips(config, &real_dir, Origin::Real)?;

    Ok(SpeakerClips {
        synthetic,
        real,
        synthetic_dir,
        real_dir,
    })
}

/// List the playable files directly inside `dir`. Subdirectories and
/// files with unrecognized extensions are skipped.
fn list_clips(config: &AppConfig, dir: &Path, origin: Origin) -> Result<Vec<AudioFile>> {
    let mut clips = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| AuditionError::FolderRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if config.is_audio_file(&name) {
            clips.push(AudioFile {
                name,
                dir: dir.to_path_buf(),
                origin,
            });
        }
    }

    clips.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_dataset(files: &[(&str, &str)]) -> (TempDir, AppConfig) {
        let root = TempDir::new().unwrap();
        for (folder, name) in files {
            let dir = root.path().join("Artem").join(folder);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(name), b"stub").unwrap();
        }
        let config = AppConfig::default().with_dataset_root(root.path());
        (root, config)
    }

    #[test]
    fn test_scan_lists_both_folders() {
        let (_root, config) = make_dataset(&[
            ("Syntes", "s1.wav"),
            ("Syntes", "s2.mp3"),
            ("Real", "r1.flac"),
            ("Real", "r2.ogg"),
        ]);

        let clips = scan_speaker(&config, "Artem").unwrap();
        assert_eq!(clips.synthetic.len(), 2);
        assert_eq!(clips.real.len(), 2);
        assert!(clips.synthetic.iter().all(|c| c.origin == Origin::Synthetic));
        assert!(clips.real.iter().all(|c| c.origin == Origin::Real));
    }

    #[test]
    fn test_scan_filters_unrecognized_extensions() {
        let (_root, config) = make_dataset(&[
            ("Syntes", "s1.wav"),
            ("Syntes", "notes.txt"),
            ("Syntes", "upper.WAV"),
            ("Real", "r1.wav"),
        ]);

        let clips = scan_speaker(&config, "Artem").unwrap();
        let names: Vec<&str> = clips.synthetic.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["s1.wav"]);
    }

    #[test]
    fn test_scan_skips_nested_directories() {
        let (root, config) = make_dataset(&[("Syntes", "s1.wav"), ("Real", "r1.wav")]);
        let nested = root.path().join("Artem").join("Real").join("old");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("buried.wav"), b"stub").unwrap();

        let clips = scan_speaker(&config, "Artem").unwrap();
        assert_eq!(clips.real.len(), 1);
        assert_eq!(clips.real[0].name, "r1.wav");
    }

    #[test]
    fn test_scan_sorts_by_name() {
        let (_root, config) = make_dataset(&[
            ("Syntes", "b.wav"),
            ("Syntes", "a.wav"),
            ("Syntes", "c.wav"),
            ("Real", "r.wav"),
        ]);

        let clips = scan_speaker(&config, "Artem").unwrap();
        let names: Vec<&str> = clips.synthetic.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a.wav", "b.wav", "c.wav"]);
    }

    #[test]
    fn test_missing_folder_is_reported() {
        let (_root, config) = make_dataset(&[("Syntes", "s1.wav")]);

        let err = scan_speaker(&config, "Artem").unwrap_err();
        match err {
            AuditionError::SpeakerFolderMissing { path } => {
                assert!(path.ends_with(REAL_DIR_NAME));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_folders_are_not_an_error() {
        let root = TempDir::new().unwrap();
        for folder in [SYNTHETIC_DIR_NAME, REAL_DIR_NAME] {
            fs::create_dir_all(root.path().join("Artem").join(folder)).unwrap();
        }
        let config = AppConfig::default().with_dataset_root(root.path());

        let clips = scan_speaker(&config, "Artem").unwrap();
        assert!(clips.synthetic.is_empty());
        assert!(clips.real.is_empty());
    }

    #[test]
    fn test_clip_path_joins_dir_and_name() {
        let clip = AudioFile {
            name: "s1.wav".to_string(),
            dir: PathBuf::from("Dataset/Artem/Syntes"),
            origin: Origin::Synthetic,
        };
        assert_eq!(clip.path(), PathBuf::from("Dataset/Artem/Syntes/s1.wav"));
    }
}
