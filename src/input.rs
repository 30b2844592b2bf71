use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// High-level inputs the front end reacts to
///
/// Raw SDL2 events are translated into these so menus and screens never
/// deal with keycodes directly, and so tests can script input batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// Arrow up: move the selection towards the first row
    Up,
    /// Arrow down: move the selection towards the last row
    Down,
    /// Return / keypad Enter
    Activate,
    /// Escape
    Back,
    /// Window close request
    Quit,
}

/// Translates one SDL2 event, dropping everything the front end ignores
pub fn translate(event: &Event) -> Option<MenuInput> {
    match event {
        Event::Quit { .. } => Some(MenuInput::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => match *key {
            Keycode::Up => Some(MenuInput::Up),
            Keycode::Down => Some(MenuInput::Down),
            Keycode::Return | Keycode::KpEnter => Some(MenuInput::Activate),
            Keycode::Escape => Some(MenuInput::Back),
            _ => None,
        },
        _ => None,
    }
}

/// Drains every pending SDL2 event, in arrival order
///
/// Never blocks: an empty queue yields an empty batch.
pub fn poll_inputs(event_pump: &mut EventPump) -> Vec<MenuInput> {
    event_pump.poll_iter().filter_map(|event| translate(&event)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(key: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        assert_eq!(translate(&key_down(Keycode::Up)), Some(MenuInput::Up));
        assert_eq!(translate(&key_down(Keycode::Down)), Some(MenuInput::Down));
    }

    #[test]
    fn test_enter_keys_activate() {
        assert_eq!(translate(&key_down(Keycode::Return)), Some(MenuInput::Activate));
        assert_eq!(translate(&key_down(Keycode::KpEnter)), Some(MenuInput::Activate));
    }

    #[test]
    fn test_escape_and_close() {
        assert_eq!(translate(&key_down(Keycode::Escape)), Some(MenuInput::Back));
        assert_eq!(translate(&Event::Quit { timestamp: 0 }), Some(MenuInput::Quit));
    }

    #[test]
    fn test_other_events_ignored() {
        assert_eq!(translate(&key_down(Keycode::A)), None);
        let key_up = Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::Return),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(translate(&key_up), None);
    }
}
