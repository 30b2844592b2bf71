use super::progress::{Progress, ProgressError, ProgressStore};
use crate::clock::FrameClock;
use crate::error::GameError;
use crate::gui::Flow;
use crate::input::{MenuInput, poll_inputs};
use crate::text::{BitmapFont, FontMetrics, MenuFont, draw_centered_text};
use log::{info, warn};
use sdl2::EventPump;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// How a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Stage 1, discarding saved progress
    Fresh,
    /// Saved stage, or stage 1 if there is none
    Resume,
}

/// Session state: which stage the player is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRun {
    stage: u32,
}

impl StageRun {
    pub fn begin(mode: SessionMode, store: &ProgressStore) -> Result<Self, ProgressError> {
        let stage = match mode {
            SessionMode::Fresh => 1,
            SessionMode::Resume => match store.load() {
                Ok(Some(progress)) => progress.stage.max(1),
                Ok(None) => {
                    info!("No saved progress, starting a new run");
                    1
                }
                Err(e) => {
                    warn!("Could not read saved progress ({}), starting a new run", e);
                    1
                }
            },
        };

        let run = StageRun { stage };
        run.save(store)?;
        Ok(run)
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Applies one input batch
    ///
    /// Returns `Some(flow)` once the session is over: `Continue` to go back
    /// to the menu, `Exit` when the window was closed. Progress is saved
    /// after every cleared stage and on the way out.
    pub fn handle(
        &mut self,
        inputs: &[MenuInput],
        store: &ProgressStore,
    ) -> Result<Option<Flow>, ProgressError> {
        for input in inputs {
            match input {
                MenuInput::Activate => {
                    self.stage = self.stage.saturating_add(1);
                    info!("Stage cleared, now on stage {}", self.stage);
                    self.save(store)?;
                }
                MenuInput::Back => {
                    self.save(store)?;
                    return Ok(Some(Flow::Continue));
                }
                MenuInput::Quit => {
                    self.save(store)?;
                    return Ok(Some(Flow::Exit));
                }
                MenuInput::Up | MenuInput::Down => {}
            }
        }
        Ok(None)
    }

    fn save(&self, store: &ProgressStore) -> Result<(), ProgressError> {
        store.save(&Progress::at_stage(self.stage))
    }
}

/// Runs a session until the player leaves it
///
/// Blocks the caller; the returned flow tells the menu whether to keep
/// going or shut down.
pub fn run_session(
    canvas: &mut Canvas<Window>,
    event_pump: &mut EventPump,
    font: &MenuFont,
    store: &ProgressStore,
    mode: SessionMode,
    tick_rate: u32,
) -> Result<Flow, GameError> {
    let mut run = StageRun::begin(mode, store)?;
    let mut clock = FrameClock::new(tick_rate);
    info!("Session started ({:?}) on stage {}", mode, run.stage());

    loop {
        clock.tick();
        let inputs = poll_inputs(event_pump);
        if let Some(flow) = run.handle(&inputs, store)? {
            info!("Session ended on stage {}", run.stage());
            return Ok(flow);
        }

        render_stage(canvas, font, run.stage())?;
        canvas.present();
    }
}

fn render_stage(canvas: &mut Canvas<Window>, font: &MenuFont, stage: u32) -> Result<(), String> {
    let (screen_width, screen_height) = canvas.logical_size();
    let center_x = screen_width as i32 / 2;

    canvas.set_draw_color(Color::RGB(20, 24, 48));
    canvas.clear();

    let banner = BitmapFont::new(4);
    let title = format!("STAGE {}", stage);
    let gold = Color::RGB(255, 220, 80);
    draw_centered_text(canvas, &banner, &title, gold, center_x, screen_height as i32 / 3)?;

    let hint_y = screen_height as i32 * 2 / 3;
    let white = Color::RGB(255, 255, 255);
    draw_centered_text(canvas, font, "ENTER: CLEAR STAGE", white, center_x, hint_y)?;
    draw_centered_text(
        canvas,
        font,
        "ESC: BACK TO MENU",
        white,
        center_x,
        hint_y + font.line_height() as i32 + 8,
    )?;

    Ok(())
}
