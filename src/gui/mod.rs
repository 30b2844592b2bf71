//! Screen-Space GUI
//!
//! Full-screen front-end components, drawn in screen coordinates on top of
//! whatever background the caller renders.
//!
//! # Available Components
//!
//! - [`SelectionMenu`] - generic list of labelled, activatable options
//! - [`MenuScreen`] - the main menu and its control loop
//! - [`cutscene`] - blocking page of text (help screen)
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::menu::{MenuOption, SelectionMenu};
//!
//! let mut menu = SelectionMenu::new(vec![
//!     MenuOption::new("PLAY", Command::Play),
//!     MenuOption::new("QUIT", Command::Quit),
//! ]);
//! menu.center_at(320, 240);
//!
//! // Each frame
//! if menu.update(&inputs, &mut ctx)? == Flow::Exit {
//!     return Ok(());
//! }
//! menu.draw(&mut canvas)?;
//! ```

pub mod cutscene;
pub mod menu;
pub mod menu_screen;

pub use menu::{Flow, SelectionMenu};
pub use menu_screen::{MainAction, MenuHost, MenuScreen, MenuScreenSettings};
