//! Gameplay session stand-in
//!
//! The platformer engine proper lives outside this crate. What the menu
//! needs from it is small: start fresh or resume, block until the player
//! leaves, then hand control back. This module provides exactly that,
//! with a stage counter persisted through [`ProgressStore`] so CONTINUE
//! picks up where the last session stopped.
//!
//! - `progress`: the progress file and its errors
//! - `stage`: the blocking session screen

pub mod progress;
pub mod stage;

pub use progress::{ProgressError, ProgressStore};
pub use stage::{SessionMode, run_session};
