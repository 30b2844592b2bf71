//! Front-end configuration
//!
//! Loaded from a JSON file (`assets/config/menu.json` by default). Every
//! field has a default, so a partial file only overrides what it names and
//! a missing file means "use the defaults".

use sdl2::pixels::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/menu.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub window: WindowConfig,
    /// Control-loop rate in ticks per second
    pub tick_rate: u32,
    /// Root directory all asset names resolve against
    pub asset_root: PathBuf,
    pub background: String,
    /// Window icon, relative to the asset root
    pub icon: String,
    pub fonts: FontConfig,
    pub music: MusicConfig,
    pub menu: MenuLayout,
    pub status_line: TextLine,
    pub title_lines: Vec<TextLine>,
    pub help_lines: Vec<String>,
    /// Overrides the per-user save directory
    pub save_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub menu: String,
    pub menu_size: u16,
    pub title: String,
    pub title_size: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MusicConfig {
    pub track: String,
    /// 0.0 (silent) to 1.0 (full)
    pub volume: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuLayout {
    pub center: (i32, i32),
    pub normal_color: [u8; 3],
    pub highlight_color: [u8; 3],
}

/// A fixed label drawn horizontally centred at height `y`
#[derive(Debug, Clone, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub y: i32,
}

impl TextLine {
    pub fn new(text: &str, y: i32) -> Self {
        TextLine {
            text: text.to_string(),
            y,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            window: WindowConfig::default(),
            tick_rate: 40,
            asset_root: PathBuf::from("assets"),
            background: "menu.png".to_string(),
            icon: "icon.ico".to_string(),
            fonts: FontConfig::default(),
            music: MusicConfig::default(),
            menu: MenuLayout::default(),
            status_line: TextLine::new("ready ???", 70),
            title_lines: vec![
                TextLine::new("Platform Run", 180),
                TextLine::new("press enter", 235),
            ],
            help_lines: vec![
                "HELP".to_string(),
                String::new(),
                "Jump: Arrow key up".to_string(),
                "Super Jump: Arrow keys up/right".to_string(),
                "Return: Esc returns to the menu".to_string(),
                "Note: Jump on enemies to defeat them!".to_string(),
                String::new(),
            ],
            save_dir: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Platform Run".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            menu: "fonts/font.ttf".to_string(),
            menu_size: 16,
            title: "fonts/title.ttf".to_string(),
            title_size: 45,
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        MusicConfig {
            track: "title.ogg".to_string(),
            volume: 0.75,
        }
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        MenuLayout {
            center: (300, 400),
            normal_color: [255, 255, 255],
            highlight_color: [255, 0, 0],
        }
    }
}

impl MenuLayout {
    pub fn normal(&self) -> Color {
        rgb(self.normal_color)
    }

    pub fn highlight(&self) -> Color {
        rgb(self.highlight_color)
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::RGB(r, g, b)
}

impl MenuConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: MenuConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.tick_rate, 40);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.menu.center, (300, 400));
        assert_eq!(config.menu.highlight(), Color::RGB(255, 0, 0));
        assert_eq!(config.menu.normal(), Color::RGB(255, 255, 255));
        assert_eq!(config.title_lines.len(), 2);
        assert_eq!(config.icon, "icon.ico");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "tick_rate": 60, "menu": { "highlight_color": [0, 255, 0] } }"#;
        let config: MenuConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.menu.highlight(), Color::RGB(0, 255, 0));
        assert_eq!(config.menu.center, (300, 400));
        assert_eq!(config.music.track, "title.ogg");
    }

    #[test]
    fn test_text_lines_from_json() {
        let json = r#"{ "title_lines": [ { "text": "HELLO", "y": 10 } ] }"#;
        let config: MenuConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.title_lines.len(), 1);
        assert_eq!(config.title_lines[0].text, "HELLO");
        assert_eq!(config.title_lines[0].y, 10);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = MenuConfig::load_or_default("does/not/exist.json").unwrap();
        assert_eq!(config.background, "menu.png");
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(serde_json::from_str::<MenuConfig>("{ tick_rate: }").is_err());
    }
}
