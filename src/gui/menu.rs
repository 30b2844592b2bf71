//! Selection Menu Component
//!
//! A vertical list of labelled options with one highlighted row. Arrow
//! inputs move the highlight (wrapping at both ends) and Activate runs the
//! highlighted option's [`Action`] immediately, in the middle of the input
//! batch.
//!
//! Layout is measured lazily: the block width starts as the widest label
//! in the construction-time font and only ever grows as later draws find
//! wider labels. The height is fixed at construction.

use crate::input::MenuInput;
use crate::text::{FontMetrics, MenuFont, TextSurface};
use sdl2::pixels::Color;

/// Vertical gap between rows, in pixels
pub const ROW_PADDING: u32 = 4;

/// What the caller should do after running an action or an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the current screen
    Exit,
}

/// A command attached to a menu row
///
/// `Ctx` is whatever the command needs to do its work (the screen's host,
/// a test recorder, ...). Returning [`Flow::Exit`] asks the owner of the
/// menu to unwind.
pub trait Action<Ctx: ?Sized> {
    type Error;

    fn execute(&self, ctx: &mut Ctx) -> Result<Flow, Self::Error>;
}

/// One selectable row
#[derive(Debug, Clone)]
pub struct MenuOption<A> {
    pub label: String,
    pub action: A,
}

impl<A> MenuOption<A> {
    pub fn new(label: impl Into<String>, action: A) -> Self {
        MenuOption {
            label: label.into(),
            action,
        }
    }
}

pub struct SelectionMenu<F, A> {
    options: Vec<MenuOption<A>>,
    selected: usize,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    font: F,
    normal_color: Color,
    highlight_color: Color,
}

impl<'a, A> SelectionMenu<MenuFont<'a>, A> {
    /// Creates a menu using the built-in font
    ///
    /// # Panics
    ///
    /// If `options` is empty.
    #[allow(dead_code)] // Reserved for menus built without a host font
    pub fn new(options: Vec<MenuOption<A>>) -> Self {
        Self::with_font(options, MenuFont::default())
    }
}

impl<F: FontMetrics, A> SelectionMenu<F, A> {
    /// Creates a menu measured with `font`
    ///
    /// # Panics
    ///
    /// If `options` is empty.
    pub fn with_font(options: Vec<MenuOption<A>>, font: F) -> Self {
        assert!(!options.is_empty(), "a selection menu needs at least one option");

        let width = options
            .iter()
            .map(|option| font.text_size(&option.label).0)
            .fold(1, u32::max);
        let height = options.len() as u32 * font.line_height();

        SelectionMenu {
            options,
            selected: 0,
            x: 0,
            y: 0,
            width,
            height,
            font,
            normal_color: Color::RGB(0, 0, 0),
            highlight_color: Color::RGB(255, 0, 0),
        }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[allow(dead_code)] // Reserved for screens that inspect their rows
    pub fn options(&self) -> &[MenuOption<A>] {
        &self.options
    }

    #[allow(dead_code)] // Reserved for screens that report the highlighted row
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Current (width, height) of the rendered block
    pub fn content_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[allow(dead_code)] // Reserved for style queries
    pub fn font(&self) -> &F {
        &self.font
    }

    #[allow(dead_code)] // Reserved for style queries
    pub fn normal_color(&self) -> Color {
        self.normal_color
    }

    #[allow(dead_code)] // Reserved for style queries
    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    /// Sets the top-left corner of the block
    #[allow(dead_code)] // Reserved for fixed-position layouts
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Centres the block on (x, y) using its current size
    ///
    /// The width may still grow on a later draw, which shifts the visual
    /// centre. Call this after styling if that matters.
    pub fn center_at(&mut self, x: i32, y: i32) {
        self.x = x - self.width as i32 / 2;
        self.y = y - self.height as i32 / 2;
    }

    pub fn set_font(&mut self, font: F) {
        self.font = font;
    }

    pub fn set_normal_color(&mut self, color: Color) {
        self.normal_color = color;
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// Applies a batch of inputs in arrival order
    ///
    /// Activate runs the highlighted action before the rest of the batch is
    /// looked at. If an action returns [`Flow::Exit`] (or fails), the rest of
    /// the batch is dropped. Back and Quit are left for the caller.
    pub fn update<C: ?Sized>(&mut self, inputs: &[MenuInput], ctx: &mut C) -> Result<Flow, A::Error>
    where
        A: Action<C>,
    {
        for input in inputs {
            match input {
                MenuInput::Down => self.step(1),
                MenuInput::Up => self.step(-1),
                MenuInput::Activate => {
                    if self.options[self.selected].action.execute(ctx)? == Flow::Exit {
                        return Ok(Flow::Exit);
                    }
                }
                MenuInput::Back | MenuInput::Quit => {}
            }
        }
        Ok(Flow::Continue)
    }

    fn step(&mut self, delta: i64) {
        let len = self.len() as i64;
        self.selected = (self.selected as i64 + delta).rem_euclid(len) as usize;
    }

    /// Draws every row, highlighting the selected one
    ///
    /// Each label is centred within the block width; rows are spaced by the
    /// current font's line height plus [`ROW_PADDING`].
    pub fn draw<S: TextSurface<F>>(&mut self, surface: &mut S) -> Result<(), String> {
        let row_step = (self.font.line_height() + ROW_PADDING) as i32;

        for (i, option) in self.options.iter().enumerate() {
            let color = if i == self.selected {
                self.highlight_color
            } else {
                self.normal_color
            };

            let (label_width, _) = self.font.text_size(&option.label);
            self.width = self.width.max(label_width);

            let x = self.x + self.width as i32 / 2 - label_width as i32 / 2;
            let y = self.y + i as i32 * row_step;
            surface.draw_text(&self.font, &option.label, color, x, y)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::BitmapFont;
    use std::convert::Infallible;

    /// Records which rows were activated
    #[derive(Default)]
    struct Log {
        fired: Vec<&'static str>,
    }

    #[derive(Debug, Clone, Copy)]
    enum Cmd {
        Record(&'static str),
        Leave,
        Fail,
    }

    impl Action<Log> for Cmd {
        type Error = String;

        fn execute(&self, log: &mut Log) -> Result<Flow, String> {
            match self {
                Cmd::Record(name) => {
                    log.fired.push(name);
                    Ok(Flow::Continue)
                }
                Cmd::Leave => Ok(Flow::Exit),
                Cmd::Fail => Err("boom".to_string()),
            }
        }
    }

    #[derive(Debug, PartialEq)]
    struct Drawn {
        text: String,
        color: Color,
        x: i32,
        y: i32,
    }

    #[derive(Default)]
    struct Recorder {
        drawn: Vec<Drawn>,
    }

    impl<F> TextSurface<F> for Recorder {
        fn draw_text(
            &mut self,
            _font: &F,
            text: &str,
            color: Color,
            x: i32,
            y: i32,
        ) -> Result<(), String> {
            self.drawn.push(Drawn {
                text: text.to_string(),
                color,
                x,
                y,
            });
            Ok(())
        }
    }

    /// Font whose labels can be made wider after construction
    #[derive(Clone, Copy)]
    struct StretchFont {
        per_char: u32,
    }

    impl FontMetrics for StretchFont {
        fn line_height(&self) -> u32 {
            10
        }

        fn text_size(&self, text: &str) -> (u32, u32) {
            (text.len() as u32 * self.per_char, 10)
        }
    }

    fn abc() -> SelectionMenu<BitmapFont, Cmd> {
        SelectionMenu::with_font(
            vec![
                MenuOption::new("A", Cmd::Record("cb1")),
                MenuOption::new("B", Cmd::Record("cb2")),
                MenuOption::new("C", Cmd::Record("cb3")),
            ],
            BitmapFont::new(1),
        )
    }

    fn run(menu: &mut SelectionMenu<BitmapFont, Cmd>, inputs: &[MenuInput]) -> (Flow, Log) {
        let mut log = Log::default();
        let flow = menu.update(inputs, &mut log).unwrap();
        (flow, log)
    }

    #[test]
    fn test_construction_defaults() {
        let menu = abc();
        assert_eq!(menu.selected_index(), 0);
        assert_eq!(menu.position(), (0, 0));
        assert_eq!(menu.normal_color(), Color::RGB(0, 0, 0));
        assert_eq!(menu.highlight_color(), Color::RGB(255, 0, 0));
        // widest label is 1 char at 6px
        assert_eq!(menu.content_size(), (6, 3 * 8));
    }

    #[test]
    fn test_height_is_rows_times_line_height() {
        for n in 1..6 {
            let options = (0..n).map(|i| MenuOption::new(format!("ROW {}", i), ())).collect();
            let menu: SelectionMenu<BitmapFont, ()> =
                SelectionMenu::with_font(options, BitmapFont::new(2));
            assert_eq!(menu.content_size().1, n * 16);
        }
    }

    #[test]
    fn test_default_font_is_builtin() {
        let menu: SelectionMenu<MenuFont, ()> =
            SelectionMenu::new(vec![MenuOption::new("NEW GAME", ())]);
        assert!(matches!(menu.font(), MenuFont::Builtin(_)));
        assert_eq!(menu.content_size(), (8 * 18, 24));
    }

    #[test]
    #[should_panic]
    fn test_empty_menu_rejected() {
        let _menu: SelectionMenu<BitmapFont, ()> =
            SelectionMenu::with_font(Vec::new(), BitmapFont::new(1));
    }

    #[test]
    fn test_down_wraps_to_first() {
        let mut menu = abc();
        let (flow, log) = run(&mut menu, &[MenuInput::Down, MenuInput::Down, MenuInput::Down]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(menu.selected_index(), 0);
        assert!(log.fired.is_empty());
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut menu = abc();
        run(&mut menu, &[MenuInput::Up]);
        assert_eq!(menu.selected_index(), 2);
    }

    #[test]
    fn test_long_batches_stay_in_range() {
        // Any mix of steps lands on (start + downs - ups) mod N
        let pattern = [
            MenuInput::Up,
            MenuInput::Up,
            MenuInput::Down,
            MenuInput::Up,
            MenuInput::Up,
            MenuInput::Up,
            MenuInput::Up,
            MenuInput::Down,
        ];
        for start in 0..3 {
            for k in 0..=pattern.len() {
                let mut menu = abc();
                run(&mut menu, &vec![MenuInput::Down; start]);
                assert_eq!(menu.selected_index(), start);

                let batch = &pattern[..k];
                run(&mut menu, batch);

                let downs = batch.iter().filter(|i| **i == MenuInput::Down).count() as i64;
                let ups = batch.iter().filter(|i| **i == MenuInput::Up).count() as i64;
                let expected = (start as i64 + downs - ups).rem_euclid(3) as usize;
                assert_eq!(menu.selected_index(), expected);
                assert!(menu.selected_index() < menu.len());
            }
        }
    }

    #[test]
    fn test_activate_uses_index_at_event_time() {
        let mut menu = abc();
        let (_, log) = run(&mut menu, &[MenuInput::Down, MenuInput::Activate]);
        assert_eq!(menu.selected_index(), 1);
        assert_eq!(log.fired, vec!["cb2"]);
    }

    #[test]
    fn test_each_activation_fires_once() {
        let mut menu = abc();
        let (_, log) = run(
            &mut menu,
            &[MenuInput::Activate, MenuInput::Up, MenuInput::Activate, MenuInput::Down],
        );
        assert_eq!(log.fired, vec!["cb1", "cb3"]);
        assert_eq!(menu.selected_index(), 0);
    }

    #[test]
    fn test_back_and_quit_ignored_by_menu() {
        let mut menu = abc();
        let (flow, log) = run(&mut menu, &[MenuInput::Back, MenuInput::Quit, MenuInput::Down]);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(menu.selected_index(), 1);
        assert!(log.fired.is_empty());
    }

    #[test]
    fn test_exit_action_stops_batch() {
        let mut menu: SelectionMenu<BitmapFont, Cmd> = SelectionMenu::with_font(
            vec![
                MenuOption::new("PLAY", Cmd::Record("play")),
                MenuOption::new("QUIT", Cmd::Leave),
            ],
            BitmapFont::new(1),
        );
        let mut log = Log::default();
        let flow = menu
            .update(
                &[MenuInput::Down, MenuInput::Activate, MenuInput::Up, MenuInput::Activate],
                &mut log,
            )
            .unwrap();
        assert_eq!(flow, Flow::Exit);
        assert_eq!(menu.selected_index(), 1);
        assert!(log.fired.is_empty());
    }

    #[test]
    fn test_action_error_propagates() {
        let mut menu: SelectionMenu<BitmapFont, Cmd> =
            SelectionMenu::with_font(vec![MenuOption::new("BAD", Cmd::Fail)], BitmapFont::new(1));
        let mut log = Log::default();
        assert_eq!(menu.update(&[MenuInput::Activate], &mut log), Err("boom".to_string()));
    }

    #[test]
    fn test_infallible_actions() {
        struct Count;
        impl Action<u32> for Count {
            type Error = Infallible;
            fn execute(&self, hits: &mut u32) -> Result<Flow, Infallible> {
                *hits += 1;
                Ok(Flow::Continue)
            }
        }

        let mut menu =
            SelectionMenu::with_font(vec![MenuOption::new("X", Count)], BitmapFont::new(1));
        let mut hits = 0;
        assert_eq!(
            menu.update(&[MenuInput::Activate, MenuInput::Activate], &mut hits),
            Ok(Flow::Continue)
        );
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_set_position_and_center() {
        let mut menu = abc();
        menu.set_position(10, 20);
        assert_eq!(menu.position(), (10, 20));

        menu.center_at(300, 400);
        // 6 x 24 block
        assert_eq!(menu.position(), (297, 388));
    }

    #[test]
    fn test_draw_layout_and_colors() {
        let mut menu = SelectionMenu::with_font(
            vec![MenuOption::new("AB", ()), MenuOption::new("WIDE", ())],
            BitmapFont::new(1),
        );
        menu.set_position(100, 50);
        menu.set_normal_color(Color::RGB(255, 255, 255));
        menu.set_highlight_color(Color::RGB(0, 0, 255));

        let mut surface = Recorder::default();
        menu.draw(&mut surface).unwrap();

        assert_eq!(
            surface.drawn,
            vec![
                // block is 24px wide; "AB" is 12px
                Drawn { text: "AB".into(), color: Color::RGB(0, 0, 255), x: 106, y: 50 },
                Drawn { text: "WIDE".into(), color: Color::RGB(255, 255, 255), x: 100, y: 62 },
            ]
        );
    }

    #[test]
    fn test_draw_is_stable_without_update() {
        let mut menu = abc();
        menu.center_at(300, 400);

        let mut first = Recorder::default();
        menu.draw(&mut first).unwrap();
        let mut second = Recorder::default();
        menu.draw(&mut second).unwrap();

        assert_eq!(first.drawn, second.drawn);
    }

    #[test]
    fn test_width_grows_but_never_shrinks() {
        let mut menu = SelectionMenu::with_font(
            vec![MenuOption::new("ONE", ()), MenuOption::new("THREE", ())],
            StretchFont { per_char: 2 },
        );
        assert_eq!(menu.content_size(), (10, 20));
        menu.center_at(100, 100);
        assert_eq!(menu.position(), (95, 90));

        // A wider font widens the block on the next draw
        menu.set_font(StretchFont { per_char: 4 });
        let mut surface = Recorder::default();
        menu.draw(&mut surface).unwrap();
        assert_eq!(menu.content_size(), (20, 20));
        // centring is not redone, so the block drifts right
        assert_eq!(menu.position(), (95, 90));

        // Once warmed up, later draws are identical
        let mut second = Recorder::default();
        menu.draw(&mut second).unwrap();
        let mut third = Recorder::default();
        menu.draw(&mut third).unwrap();
        assert_eq!(second.drawn, third.drawn);
        assert_ne!(surface.drawn, second.drawn);

        // A narrower font keeps the grown width
        menu.set_font(StretchFont { per_char: 1 });
        menu.draw(&mut Recorder::default()).unwrap();
        assert_eq!(menu.content_size(), (20, 20));
    }

    #[test]
    fn test_draw_highlight_follows_selection() {
        let mut menu = abc();
        menu.set_normal_color(Color::RGB(255, 255, 255));
        run(&mut menu, &[MenuInput::Up]);

        let mut surface = Recorder::default();
        menu.draw(&mut surface).unwrap();
        let highlighted: Vec<_> = surface
            .drawn
            .iter()
            .filter(|d| d.color == Color::RGB(255, 0, 0))
            .map(|d| d.text.as_str())
            .collect();
        assert_eq!(highlighted, vec!["C"]);
    }
}
