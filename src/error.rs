//! Error types shared across the front end
//!
//! Asset and configuration failures are fatal: they bubble up to `main`,
//! which prints them and exits. User-initiated exits are not errors and
//! travel as [`crate::gui::Flow`] values instead.

use crate::session::ProgressError;
use std::fmt;
use std::path::PathBuf;

/// A required media file could not be loaded
#[derive(Debug, Clone)]
pub struct AssetError {
    pub path: PathBuf,
    pub reason: String,
}

impl AssetError {
    pub fn new(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AssetError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unable to load: {} ({})", self.path.display(), self.reason)
    }
}

impl std::error::Error for AssetError {}

/// Crate-wide error
#[derive(Debug)]
pub enum GameError {
    Asset(AssetError),
    Progress(ProgressError),
    Config(String),
    /// SDL reports its failures as plain strings
    Sdl(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Asset(e) => write!(f, "{}", e),
            GameError::Progress(e) => write!(f, "Progress error: {}", e),
            GameError::Config(msg) => write!(f, "Config error: {}", msg),
            GameError::Sdl(msg) => write!(f, "SDL error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<AssetError> for GameError {
    fn from(error: AssetError) -> Self {
        GameError::Asset(error)
    }
}

impl From<ProgressError> for GameError {
    fn from(error: ProgressError) -> Self {
        GameError::Progress(error)
    }
}

impl From<String> for GameError {
    fn from(error: String) -> Self {
        GameError::Sdl(error)
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
