//! Main Menu Screen
//!
//! The front-end controller: builds the four-option main menu, runs the
//! fixed-rate control loop and hands control to the gameplay session or the
//! help cutscene when an option is activated.
//!
//! # Control loop
//!
//! Every tick, in this order:
//! 1. wait for the tick boundary
//! 2. drain the input queue once
//! 3. feed the batch to the menu (may run an option's action)
//! 4. leave if the batch holds a window close or Escape
//! 5. draw background, labels and menu, then present
//!
//! Everything platform-specific goes through [`MenuHost`], so the loop can
//! be driven by a scripted host in tests.

use super::menu::{Action, Flow, MenuOption, SelectionMenu};
use crate::error::GameError;
use crate::input::MenuInput;
use crate::session::SessionMode;
use crate::text::FontMetrics;
use log::{debug, info};
use sdl2::pixels::Color;

/// Options on the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    NewGame,
    Continue,
    Help,
    Quit,
}

impl MainAction {
    pub fn all() -> Vec<Self> {
        vec![Self::NewGame, Self::Continue, Self::Help, Self::Quit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NewGame => "NEW GAME",
            Self::Continue => "CONTINUE",
            Self::Help => "HELP",
            Self::Quit => "QUIT GAME",
        }
    }
}

/// Platform services the menu screen relies on
pub trait MenuHost {
    type Font: FontMetrics + Default;

    /// Blocks until the next tick boundary
    fn wait_for_tick(&mut self);

    /// Drains all pending input without blocking
    fn poll_inputs(&mut self) -> Vec<MenuInput>;

    /// (Re)starts the looping title music
    fn play_menu_music(&mut self) -> Result<(), GameError>;

    fn stop_music(&mut self);

    /// Runs a gameplay session; blocks until it ends
    fn start_session(&mut self, mode: SessionMode) -> Result<Flow, GameError>;

    /// Shows a page of text; blocks until dismissed
    fn show_cutscene(&mut self, lines: &[String]) -> Result<Flow, GameError>;

    /// Font the menu switches to during setup
    fn menu_font(&self) -> Self::Font;

    /// Draws and presents one full frame with `menu` on top
    fn draw_frame(
        &mut self,
        menu: &mut SelectionMenu<Self::Font, MainAction>,
    ) -> Result<(), GameError>;
}

/// Menu look and help text
#[derive(Debug, Clone)]
pub struct MenuScreenSettings {
    pub center: (i32, i32),
    pub normal_color: Color,
    pub highlight_color: Color,
    pub help_lines: Vec<String>,
}

/// What options act on: the host plus the help text
pub struct Launcher<H> {
    host: H,
    help_lines: Vec<String>,
    /// Set when the window was closed inside a session or cutscene
    window_closed: bool,
}

impl<H: MenuHost> Launcher<H> {
    fn play(&mut self, mode: SessionMode) -> Result<Flow, GameError> {
        let flow = self.host.start_session(mode)?;
        if flow == Flow::Continue {
            self.host.play_menu_music()?;
        }
        Ok(self.note_exit(flow))
    }

    fn help(&mut self) -> Result<Flow, GameError> {
        let flow = self.host.show_cutscene(&self.help_lines)?;
        Ok(self.note_exit(flow))
    }

    /// Sub-screens only return `Exit` when their window was closed
    fn note_exit(&mut self, flow: Flow) -> Flow {
        if flow == Flow::Exit {
            self.window_closed = true;
        }
        flow
    }

    fn exit_reason(&self) -> ExitReason {
        if self.window_closed {
            ExitReason::WindowClosed
        } else {
            ExitReason::QuitOption
        }
    }
}

impl<H: MenuHost> Action<Launcher<H>> for MainAction {
    type Error = GameError;

    fn execute(&self, launcher: &mut Launcher<H>) -> Result<Flow, GameError> {
        info!("Menu: {}", self.label());
        match self {
            MainAction::NewGame => launcher.play(SessionMode::Fresh),
            MainAction::Continue => launcher.play(SessionMode::Resume),
            MainAction::Help => launcher.help(),
            MainAction::Quit => Ok(Flow::Exit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Setup,
    Looping,
    Finished,
}

/// Why the menu screen stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Window closed, on the menu or inside a session or cutscene
    WindowClosed,
    Escape,
    /// QUIT GAME was activated
    QuitOption,
}

/// First exit request in a batch, if any
pub fn exit_request(inputs: &[MenuInput]) -> Option<ExitReason> {
    inputs.iter().find_map(|input| match input {
        MenuInput::Quit => Some(ExitReason::WindowClosed),
        MenuInput::Back => Some(ExitReason::Escape),
        _ => None,
    })
}

pub struct MenuScreen<H: MenuHost> {
    menu: SelectionMenu<H::Font, MainAction>,
    launcher: Launcher<H>,
    center: (i32, i32),
    normal_color: Color,
    highlight_color: Color,
    state: ScreenState,
}

impl<H: MenuHost> MenuScreen<H> {
    pub fn new(host: H, settings: MenuScreenSettings) -> Self {
        let options = MainAction::all()
            .into_iter()
            .map(|action| MenuOption::new(action.label(), action))
            .collect();

        MenuScreen {
            menu: SelectionMenu::with_font(options, H::Font::default()),
            launcher: Launcher {
                host,
                help_lines: settings.help_lines,
                window_closed: false,
            },
            center: settings.center,
            normal_color: settings.normal_color,
            highlight_color: settings.highlight_color,
            state: ScreenState::Setup,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ScreenState {
        self.state
    }

    #[cfg(test)]
    pub fn menu(&self) -> &SelectionMenu<H::Font, MainAction> {
        &self.menu
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.launcher.host
    }

    /// Runs setup, then ticks until something asks to leave
    pub fn run(&mut self) -> Result<ExitReason, GameError> {
        let reason = match self.setup()? {
            Some(reason) => reason,
            None => loop {
                if let Some(reason) = self.tick()? {
                    break reason;
                }
            },
        };
        Ok(self.finish(reason))
    }

    /// One-time setup: music, styling and a first update + draw
    ///
    /// The menu is centred before its font is swapped, so the centring uses
    /// the default font's measurements.
    pub fn setup(&mut self) -> Result<Option<ExitReason>, GameError> {
        debug_assert_eq!(self.state, ScreenState::Setup);
        self.launcher.host.play_menu_music()?;

        self.menu.set_highlight_color(self.highlight_color);
        self.menu.set_normal_color(self.normal_color);
        self.menu.center_at(self.center.0, self.center.1);
        self.menu.set_font(self.launcher.host.menu_font());
        debug!(
            "Menu block at {:?}, {:?}",
            self.menu.position(),
            self.menu.content_size()
        );

        let inputs = self.launcher.host.poll_inputs();
        if self.menu.update(&inputs, &mut self.launcher)? == Flow::Exit {
            return Ok(Some(self.launcher.exit_reason()));
        }
        self.launcher.host.draw_frame(&mut self.menu)?;

        self.state = ScreenState::Looping;
        Ok(None)
    }

    /// One iteration of the control loop
    ///
    /// Returns `Some` when the screen should stop; that frame is not drawn.
    pub fn tick(&mut self) -> Result<Option<ExitReason>, GameError> {
        self.launcher.host.wait_for_tick();
        let inputs = self.launcher.host.poll_inputs();

        if self.menu.update(&inputs, &mut self.launcher)? == Flow::Exit {
            return Ok(Some(self.launcher.exit_reason()));
        }
        if let Some(reason) = exit_request(&inputs) {
            return Ok(Some(reason));
        }

        self.launcher.host.draw_frame(&mut self.menu)?;
        Ok(None)
    }

    fn finish(&mut self, reason: ExitReason) -> ExitReason {
        self.launcher.host.stop_music();
        self.state = ScreenState::Finished;
        info!("Leaving menu: {:?}", reason);
        reason
    }
}
