use macroquad::input::{
    KeyCode, MouseButton, get_keys_released, is_mouse_button_pressed, is_quit_requested,
    mouse_position,
};

use super::{EventSource, Key, PointerButton, RawEvent};

const LETTERS: [(KeyCode, char); 26] = [
    (KeyCode::A, 'a'),
    (KeyCode::B, 'b'),
    (KeyCode::C, 'c'),
    (KeyCode::D, 'd'),
    (KeyCode::E, 'e'),
    (KeyCode::F, 'f'),
    (KeyCode::G, 'g'),
    (KeyCode::H, 'h'),
    (KeyCode::I, 'i'),
    (KeyCode::J, 'j'),
    (KeyCode::K, 'k'),
    (KeyCode::L, 'l'),
    (KeyCode::M, 'm'),
    (KeyCode::N, 'n'),
    (KeyCode::O, 'o'),
    (KeyCode::P, 'p'),
    (KeyCode::Q, 'q'),
    (KeyCode::R, 'r'),
    (KeyCode::S, 's'),
    (KeyCode::T, 't'),
    (KeyCode::U, 'u'),
    (KeyCode::V, 'v'),
    (KeyCode::W, 'w'),
    (KeyCode::X, 'x'),
    (KeyCode::Y, 'y'),
    (KeyCode::Z, 'z'),
];

const BUTTONS: [(MouseButton, PointerButton); 3] = [
    (MouseButton::Left, PointerButton::Primary),
    (MouseButton::Right, PointerButton::Secondary),
    (MouseButton::Middle, PointerButton::Middle),
];

/// Reads macroquad's per-frame input state.
///
/// Window close only arrives as an event if `prevent_quit()` was called at startup.
#[derive(Debug, Default)]
pub struct MacroquadEvents;

impl MacroquadEvents {
    pub fn new() -> Self {
        Self
    }
}

fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Char(' '),
        other => LETTERS
            .iter()
            .find(|(candidate, _)| *candidate == other)
            .map_or(Key::Other, |&(_, c)| Key::Char(c)),
    }
}

impl EventSource for MacroquadEvents {
    fn poll(&mut self, out: &mut Vec<RawEvent>) {
        if is_quit_requested() {
            out.push(RawEvent::QuitRequested);
        }

        let (x, y) = mouse_position();
        for (mq_button, button) in BUTTONS {
            if is_mouse_button_pressed(mq_button) {
                out.push(RawEvent::PointerDown { x, y, button });
            }
        }

        out.extend(
            get_keys_released()
                .into_iter()
                .map(|code| RawEvent::KeyReleased(key_from_code(code))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys_map() {
        assert_eq!(key_from_code(KeyCode::Escape), Key::Escape);
        assert_eq!(key_from_code(KeyCode::Space), Key::Char(' '));
        assert_eq!(key_from_code(KeyCode::Q), Key::Char('q'));
        assert_eq!(key_from_code(KeyCode::R), Key::Char('r'));
    }

    #[test]
    fn test_unnamed_keys_are_other() {
        assert_eq!(key_from_code(KeyCode::F1), Key::Other);
        assert_eq!(key_from_code(KeyCode::Up), Key::Other);
    }
}
