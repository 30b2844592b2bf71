use log::{info, warn};
use sdl2::image::InitFlag;
use sdl2::mixer;

mod assets;
mod clock;
mod config;
mod error;
mod gui;
mod host;
mod input;
mod session;
mod text;

use assets::{AssetPaths, Jukebox};
use config::{DEFAULT_CONFIG_PATH, MenuConfig};
use error::GameError;
use gui::{MenuScreen, MenuScreenSettings};
use host::{MenuFonts, SdlHost};
use session::ProgressStore;

/// Pick the largest integer window scale that fits the desktop
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, width: u32, height: u32) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / width.max(1) as i32).min(usable_h / height.max(1) as i32);
            scale.clamp(1, 4) as u32
        }
        Err(e) => {
            warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = MenuConfig::load_or_default(&config_path)
        .map_err(|e| GameError::Config(format!("{}: {}", config_path, e)))?;
    info!("Config: {}", config_path);

    run(&config)?;
    Ok(())
}

fn run(config: &MenuConfig) -> Result<(), GameError> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;
    mixer::open_audio(44_100, mixer::DEFAULT_FORMAT, mixer::DEFAULT_CHANNELS, 1_024)?;
    let _mixer_context = mixer::init(mixer::InitFlag::OGG)?;

    let assets = AssetPaths::new(&config.asset_root);
    let (width, height) = (config.window.width, config.window.height);
    let window_scale = calculate_window_scale(&video_subsystem, width, height);
    info!(
        "Window scale: {}x (window: {}x{})",
        window_scale,
        width * window_scale,
        height * window_scale
    );

    let mut window = video_subsystem
        .window(&config.window.title, width * window_scale, height * window_scale)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    window.set_icon(assets.load_surface(&config.icon)?);
    sdl_context.mouse().show_cursor(false);

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump()?;

    let background = assets.load_image(&texture_creator, &config.background)?;
    let body_font = assets.load_font(&ttf_context, &config.fonts.menu, config.fonts.menu_size)?;
    let title_font = assets.load_font(&ttf_context, &config.fonts.title, config.fonts.title_size)?;

    let save_dir = config
        .save_dir
        .clone()
        .unwrap_or_else(ProgressStore::default_directory);
    let progress = ProgressStore::new(&save_dir)?;
    info!(
        "Progress file: {} ({})",
        progress.path().display(),
        if progress.exists() { "found" } else { "none yet" }
    );

    let host = SdlHost::new(
        canvas,
        event_pump,
        background,
        MenuFonts {
            body: &body_font,
            title: &title_font,
        },
        Jukebox::new(assets.clone()),
        progress,
        config,
    );
    let settings = MenuScreenSettings {
        center: config.menu.center,
        normal_color: config.menu.normal(),
        highlight_color: config.menu.highlight(),
        help_lines: config.help_lines.clone(),
    };

    let mut screen = MenuScreen::new(host, settings);
    let reason = screen.run()?;

    // Music has to be released before the mixer closes
    drop(screen);
    mixer::close_audio();

    info!("Goodbye ({:?})", reason);
    Ok(())
}
