//! Text Rendering
//!
//! Two kinds of fonts share one interface:
//! - [`BitmapFont`]: a built-in 5x7 pixel font drawn with SDL2 rectangles.
//!   It needs no files, so it is the default font of every menu.
//! - TrueType fonts loaded through `sdl2::ttf`.
//!
//! Layout code only sees [`FontMetrics`] and [`TextSurface`], which keeps it
//! testable without a window.

use log::warn;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Size information a layout needs from a font
pub trait FontMetrics {
    /// Height of one line of text in pixels
    fn line_height(&self) -> u32;

    /// Rendered (width, height) of `text`
    fn text_size(&self, text: &str) -> (u32, u32);
}

/// Anything text can be drawn onto with font type `F`
pub trait TextSurface<F: ?Sized> {
    fn draw_text(
        &mut self,
        font: &F,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
    ) -> Result<(), String>;
}

/// Built-in 5x7 bitmap font
///
/// Each glyph cell is 6x8 font pixels (one column and one row of spacing),
/// and every font pixel is `scale` screen pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    pub scale: u32,
}

impl BitmapFont {
    pub fn new(scale: u32) -> Self {
        BitmapFont { scale: scale.max(1) }
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        BitmapFont::new(3)
    }
}

impl FontMetrics for BitmapFont {
    fn line_height(&self) -> u32 {
        8 * self.scale
    }

    fn text_size(&self, text: &str) -> (u32, u32) {
        (text.chars().count() as u32 * 6 * self.scale, 7 * self.scale)
    }
}

/// Font handed to menus and screens
#[derive(Clone, Copy)]
pub enum MenuFont<'a> {
    Builtin(BitmapFont),
    Ttf(&'a Font<'a, 'static>),
}

impl Default for MenuFont<'_> {
    fn default() -> Self {
        MenuFont::Builtin(BitmapFont::default())
    }
}

impl FontMetrics for MenuFont<'_> {
    fn line_height(&self) -> u32 {
        match self {
            MenuFont::Builtin(font) => font.line_height(),
            MenuFont::Ttf(font) => font.height().max(0) as u32,
        }
    }

    fn text_size(&self, text: &str) -> (u32, u32) {
        match self {
            MenuFont::Builtin(font) => font.text_size(text),
            MenuFont::Ttf(font) => font.size_of(text).unwrap_or_else(|e| {
                warn!("Could not measure {:?}: {}", text, e);
                (0, font.height().max(0) as u32)
            }),
        }
    }
}

impl TextSurface<BitmapFont> for Canvas<Window> {
    fn draw_text(
        &mut self,
        font: &BitmapFont,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        draw_simple_text(self, text, x, y, color, font.scale)
    }
}

impl<'a> TextSurface<MenuFont<'a>> for Canvas<Window> {
    fn draw_text(
        &mut self,
        font: &MenuFont<'a>,
        text: &str,
        color: Color,
        x: i32,
        y: i32,
    ) -> Result<(), String> {
        match font {
            MenuFont::Builtin(bitmap) => draw_simple_text(self, text, x, y, color, bitmap.scale),
            MenuFont::Ttf(ttf) => {
                // SDL_ttf refuses to render zero-width text
                if text.is_empty() {
                    return Ok(());
                }
                let rendered = ttf.render(text).blended(color).map_err(|e| e.to_string())?;
                let texture_creator = self.texture_creator();
                let texture = texture_creator
                    .create_texture_from_surface(&rendered)
                    .map_err(|e| e.to_string())?;
                self.copy(
                    &texture,
                    None,
                    Rect::new(x, y, rendered.width(), rendered.height()),
                )
            }
        }
    }
}

/// Draws `text` horizontally centred on `center_x`
pub fn draw_centered_text<F, S>(
    surface: &mut S,
    font: &F,
    text: &str,
    color: Color,
    center_x: i32,
    y: i32,
) -> Result<(), String>
where
    F: FontMetrics,
    S: TextSurface<F>,
{
    let (width, _) = font.text_size(text);
    surface.draw_text(font, text, color, center_x - width as i32 / 2, y)
}

/// Renders bitmap text using procedural rectangles (5x7 font)
///
/// Text is case-insensitive; unknown characters render as a full block.
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let advance = (6 * scale) as i32;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * advance;

        for (row, pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Row bitmaps for one character, most significant bit on the left
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0; 7],
        _ => [0b11111; 7],
    }
}
