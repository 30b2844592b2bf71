//! Asset loading
//!
//! Every loader resolves names against the asset root and fails with an
//! [`AssetError`]. A missing or corrupt asset is fatal: callers propagate
//! the error up to `main` instead of running without it.

use crate::error::AssetError;
use log::{debug, info};
use sdl2::image::{LoadSurface, LoadTexture};
use sdl2::mixer::Music;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use std::path::{Path, PathBuf};

/// SDL_mixer's full volume
const MIX_MAX_VOLUME: i32 = 128;

/// Source art is drawn at twice its pixel size
pub const IMAGE_SCALE: u32 = 2;

/// Resolves asset names to paths under one root directory
#[derive(Debug, Clone)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        AssetPaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Loads an image as a texture
    pub fn load_image<'a>(
        &self,
        texture_creator: &'a TextureCreator<WindowContext>,
        name: &str,
    ) -> Result<Texture<'a>, AssetError> {
        let path = self.resolve_path(name);
        let texture = texture_creator
            .load_texture(&path)
            .map_err(|e| AssetError::new(&path, e))?;
        debug!("Loaded image {}", path.display());
        Ok(texture)
    }

    /// Loads an image as a plain surface (window icons)
    pub fn load_surface(&self, name: &str) -> Result<Surface<'static>, AssetError> {
        let path = self.resolve_path(name);
        let surface = Surface::from_file(&path).map_err(|e| AssetError::new(&path, e))?;
        debug!("Loaded surface {}", path.display());
        Ok(surface)
    }

    /// Loads a TrueType font at `size` points
    pub fn load_font<'ttf>(
        &self,
        ttf: &'ttf Sdl2TtfContext,
        name: &str,
        size: u16,
    ) -> Result<Font<'ttf, 'static>, AssetError> {
        let path = self.resolve_path(name);
        let font = ttf.load_font(&path, size).map_err(|e| AssetError::new(&path, e))?;
        debug!("Loaded font {} at {}pt", path.display(), size);
        Ok(font)
    }
}

/// Background music player
///
/// Keeps the current track alive while SDL_mixer streams it. Playback is
/// fire-and-forget: the mixer runs on its own audio thread.
pub struct Jukebox {
    paths: AssetPaths,
    current: Option<Music<'static>>,
}

impl Jukebox {
    pub fn new(paths: AssetPaths) -> Self {
        Jukebox {
            paths,
            current: None,
        }
    }

    /// Starts `name`, replacing whatever is playing
    ///
    /// `volume` is clamped to 0.0..=1.0; `loops` of -1 repeats forever.
    pub fn play_music(&mut self, name: &str, volume: f32, loops: i32) -> Result<(), AssetError> {
        let path = self.paths.resolve_path(name);
        let music = Music::from_file(&path).map_err(|e| AssetError::new(&path, e))?;
        Music::set_volume(mixer_volume(volume));
        music.play(loops).map_err(|e| AssetError::new(&path, e))?;
        self.current = Some(music);
        info!("Playing {}", path.display());
        Ok(())
    }

    pub fn stop_music(&mut self) {
        Music::halt();
        self.current = None;
    }
}

fn mixer_volume(volume: f32) -> i32 {
    (volume.clamp(0.0, 1.0) * MIX_MAX_VOLUME as f32).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_joins_root() {
        let paths = AssetPaths::new("assets");
        assert_eq!(paths.resolve_path("fonts/font.ttf"), PathBuf::from("assets/fonts/font.ttf"));
    }

    #[test]
    fn test_missing_icon_is_an_asset_error() {
        let paths = AssetPaths::new("no-such-asset-root");
        let err = paths.load_surface("icon.ico").err().unwrap();
        assert_eq!(err.path, PathBuf::from("no-such-asset-root/icon.ico"));
        assert!(err.to_string().starts_with("Unable to load: "));
    }

    #[test]
    fn test_mixer_volume_mapping() {
        assert_eq!(mixer_volume(0.0), 0);
        assert_eq!(mixer_volume(0.75), 96);
        assert_eq!(mixer_volume(1.0), 128);
        assert_eq!(mixer_volume(3.0), 128);
        assert_eq!(mixer_volume(-1.0), 0);
    }
}
