//! Cutscene Screen
//!
//! A blocking, full-screen page of text lines. Used for the help screen.
//! Enter or Escape dismisses it; closing the window asks the caller to shut
//! down.

use super::Flow;
use crate::clock::FrameClock;
use crate::input::{MenuInput, poll_inputs};
use crate::text::{FontMetrics, MenuFont, TextSurface};
use log::debug;
use sdl2::EventPump;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Height of the first line
const FIRST_LINE_Y: i32 = 100;

/// Extra space between lines
const LINE_GAP: u32 = 8;

/// Decides whether a batch ends the cutscene
pub fn dismissal(inputs: &[MenuInput]) -> Option<Flow> {
    inputs.iter().find_map(|input| match input {
        MenuInput::Activate | MenuInput::Back => Some(Flow::Continue),
        MenuInput::Quit => Some(Flow::Exit),
        MenuInput::Up | MenuInput::Down => None,
    })
}

/// Draws every line horizontally centred on `center_x`
pub fn draw_lines<F, S>(
    surface: &mut S,
    font: &F,
    lines: &[String],
    color: Color,
    center_x: i32,
) -> Result<(), String>
where
    F: FontMetrics,
    S: TextSurface<F>,
{
    let step = (font.line_height() + LINE_GAP) as i32;
    for (i, line) in lines.iter().enumerate() {
        let (width, _) = font.text_size(line);
        let y = FIRST_LINE_Y + i as i32 * step;
        surface.draw_text(font, line, color, center_x - width as i32 / 2, y)?;
    }
    Ok(())
}

/// Shows `lines` until the player dismisses them
pub fn show(
    canvas: &mut Canvas<Window>,
    event_pump: &mut EventPump,
    font: &MenuFont,
    lines: &[String],
    tick_rate: u32,
) -> Result<Flow, String> {
    let mut clock = FrameClock::new(tick_rate);
    let (screen_width, _) = canvas.logical_size();
    debug!("Cutscene with {} lines", lines.len());

    wait_for_dismissal(
        &mut clock,
        || poll_inputs(event_pump),
        || {
            canvas.set_draw_color(Color::RGB(0, 0, 0));
            canvas.clear();
            draw_lines(canvas, font, lines, Color::RGB(255, 255, 255), screen_width as i32 / 2)?;
            canvas.present();
            Ok(())
        },
    )
}

/// Ticks, polls and redraws until a batch dismisses the page
///
/// Every polled batch is checked, including the first one.
fn wait_for_dismissal<P, D>(
    clock: &mut FrameClock,
    mut poll: P,
    mut draw: D,
) -> Result<Flow, String>
where
    P: FnMut() -> Vec<MenuInput>,
    D: FnMut() -> Result<(), String>,
{
    loop {
        clock.tick();
        if let Some(flow) = dismissal(&poll()) {
            return Ok(flow);
        }
        draw()?;
    }
}
