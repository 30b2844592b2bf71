//! Progress file handling
//!
//! A single JSON file remembers how far the player got, which is what the
//! menu's CONTINUE option resumes from.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current progress file version
pub const CURRENT_PROGRESS_VERSION: u32 = 1;

const PROGRESS_FILE: &str = "progress.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub version: u32,
    /// Next stage to play, starting at 1
    pub stage: u32,
    /// Local time of the save, RFC 3339
    pub saved_at: String,
}

impl Progress {
    pub fn at_stage(stage: u32) -> Self {
        Progress {
            version: CURRENT_PROGRESS_VERSION,
            stage: stage.max(1),
            saved_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

#[derive(Debug)]
pub enum ProgressError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for ProgressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressError::IoError(e) => write!(f, "IO error: {}", e),
            ProgressError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            ProgressError::InvalidVersion(v) => write!(f, "Invalid progress version: {}", v),
        }
    }
}

impl std::error::Error for ProgressError {}

impl From<std::io::Error> for ProgressError {
    fn from(err: std::io::Error) -> Self {
        ProgressError::IoError(err)
    }
}

impl From<serde_json::Error> for ProgressError {
    fn from(err: serde_json::Error) -> Self {
        ProgressError::SerializationError(err)
    }
}

pub struct ProgressStore {
    directory: PathBuf,
}

impl ProgressStore {
    /// Creates a store in `directory`, creating it if needed
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, ProgressError> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }
        Ok(ProgressStore { directory })
    }

    /// Per-user save directory, falling back to `./saves`
    pub fn default_directory() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".platformer-front/saves"))
            .unwrap_or_else(|| PathBuf::from("./saves"))
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(PROGRESS_FILE)
    }

    pub fn save(&self, progress: &Progress) -> Result<(), ProgressError> {
        let json = serde_json::to_string_pretty(progress)?;

        // Write to a temp file first, then rename over the real one
        let path = self.path();
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;
        info!("Progress saved: stage {}", progress.stage);
        Ok(())
    }

    /// Loads saved progress, or `None` if nothing was saved yet
    pub fn load(&self) -> Result<Option<Progress>, ProgressError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let progress: Progress = serde_json::from_str(&json)?;

        if progress.version > CURRENT_PROGRESS_VERSION {
            return Err(ProgressError::InvalidVersion(progress.version));
        }

        Ok(Some(progress))
    }

    pub fn exists(&self) -> bool {
        self.path().exists()
    }
}
