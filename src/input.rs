use macroquad::prelude::*;

use crate::board::Direction;

/// Something the player asked for, from a key or a button.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    Steer(Direction),
    Start,
    TogglePause,
    Stop,
}

pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::Steer(Direction::Up)),
        KeyCode::Down => Some(Action::Steer(Direction::Down)),
        KeyCode::Left => Some(Action::Steer(Direction::Left)),
        KeyCode::Right => Some(Action::Steer(Direction::Right)),
        KeyCode::Enter | KeyCode::KpEnter => Some(Action::Start),
        KeyCode::Space | KeyCode::P => Some(Action::TogglePause),
        KeyCode::Escape => Some(Action::Stop),
        _ => None,
    }
}

/// Keys checked every frame. Shortcuts come before arrows so a start pressed
/// together with an arrow does not reset the new direction.
const MAPPED_KEYS: [KeyCode; 9] = [
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Space,
    KeyCode::P,
    KeyCode::Escape,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
];

/// Every action whose key was pressed this frame, in `MAPPED_KEYS` order.
pub fn actions_for_frame(pressed: impl Fn(KeyCode) -> bool) -> Vec<Action> {
    MAPPED_KEYS
        .iter()
        .copied()
        .filter(|&key| pressed(key))
        .filter_map(action_for_key)
        .collect()
}

/// Keyboard subscription held by the app for as long as the window is open.
pub struct KeyListener {
    presses: u64,
}

impl KeyListener {
    pub fn mount() -> Self {
        log::debug!("key listener mounted");
        Self { presses: 0 }
    }

    pub fn poll(&mut self) -> Vec<Action> {
        let actions = actions_for_frame(is_key_pressed);
        self.presses += actions.len() as u64;
        actions
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        log::debug!("key listener unmounted after {} presses", self.presses);
    }
}
