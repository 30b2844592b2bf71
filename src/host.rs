//! SDL2 implementation of [`MenuHost`]
//!
//! Owns the window canvas and event pump, the loaded menu assets and the
//! music player, and routes the menu's requests to the session and
//! cutscene screens.

use crate::assets::{IMAGE_SCALE, Jukebox};
use crate::clock::FrameClock;
use crate::config::MenuConfig;
use crate::error::GameError;
use crate::gui::{Flow, MainAction, MenuHost, SelectionMenu, cutscene};
use crate::input::{self, MenuInput};
use crate::session::{ProgressStore, SessionMode, run_session};
use crate::text::{MenuFont, draw_centered_text};
use log::debug;
use sdl2::EventPump;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Fonts used on the menu screen
pub struct MenuFonts<'a> {
    /// Menu rows, status line, help text
    pub body: &'a Font<'a, 'static>,
    /// Title lines
    pub title: &'a Font<'a, 'static>,
}

pub struct SdlHost<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    background: Texture<'a>,
    fonts: MenuFonts<'a>,
    jukebox: Jukebox,
    progress: ProgressStore,
    clock: FrameClock,
    config: &'a MenuConfig,
}

impl<'a> SdlHost<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        background: Texture<'a>,
        fonts: MenuFonts<'a>,
        jukebox: Jukebox,
        progress: ProgressStore,
        config: &'a MenuConfig,
    ) -> Self {
        let clock = FrameClock::new(config.tick_rate);
        debug!("Frame budget: {:?}", clock.frame());
        SdlHost {
            canvas,
            event_pump,
            background,
            fonts,
            jukebox,
            progress,
            clock,
            config,
        }
    }

    fn body_font(&self) -> MenuFont<'a> {
        MenuFont::Ttf(self.fonts.body)
    }
}

impl<'a> MenuHost for SdlHost<'a> {
    type Font = MenuFont<'a>;

    fn wait_for_tick(&mut self) {
        self.clock.tick();
    }

    fn poll_inputs(&mut self) -> Vec<MenuInput> {
        input::poll_inputs(&mut self.event_pump)
    }

    fn play_menu_music(&mut self) -> Result<(), GameError> {
        let music = &self.config.music;
        self.jukebox.play_music(&music.track, music.volume, -1)?;
        Ok(())
    }

    fn stop_music(&mut self) {
        self.jukebox.stop_music();
    }

    fn start_session(&mut self, mode: SessionMode) -> Result<Flow, GameError> {
        self.jukebox.stop_music();
        let font = self.body_font();
        run_session(
            &mut self.canvas,
            &mut self.event_pump,
            &font,
            &self.progress,
            mode,
            self.config.tick_rate,
        )
    }

    fn show_cutscene(&mut self, lines: &[String]) -> Result<Flow, GameError> {
        let font = self.body_font();
        let flow = cutscene::show(
            &mut self.canvas,
            &mut self.event_pump,
            &font,
            lines,
            self.config.tick_rate,
        )?;
        Ok(flow)
    }

    fn menu_font(&self) -> MenuFont<'a> {
        self.body_font()
    }

    fn draw_frame(
        &mut self,
        menu: &mut SelectionMenu<MenuFont<'a>, MainAction>,
    ) -> Result<(), GameError> {
        let query = self.background.query();
        self.canvas.copy(
            &self.background,
            None,
            Rect::new(0, 0, query.width * IMAGE_SCALE, query.height * IMAGE_SCALE),
        )?;

        let config = self.config;
        let center_x = config.window.width as i32 / 2;
        let white = Color::RGB(255, 255, 255);

        let body_font = self.body_font();
        let status = &config.status_line;
        draw_centered_text(&mut self.canvas, &body_font, &status.text, white, center_x, status.y)?;

        let title_font = MenuFont::Ttf(self.fonts.title);
        for line in &config.title_lines {
            draw_centered_text(&mut self.canvas, &title_font, &line.text, white, center_x, line.y)?;
        }

        menu.draw(&mut self.canvas)?;
        self.canvas.present();
        Ok(())
    }
}
