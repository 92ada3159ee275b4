// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input events consumed by the interaction controller.

use serde::{Deserialize, Serialize};

/// Modifier key state at the time of an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };

    pub const SHIFT: Modifiers = Modifiers { shift: true };
}

/// Pointer event in screen pixels (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.modifiers.shift = shift;
        self
    }
}

/// Keys the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// `R`
    Rotate,
    /// `+` / `=`
    Grow,
    /// `-`
    Shrink,
    /// `Enter`
    Deselect,
}

impl Key {
    /// Screen direction for arrow keys.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }
}

/// Screen-relative direction of an on-screen move button or arrow key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// How the user selects and starts dragging objects
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Mouse: press on the selected object to drag it.
    #[default]
    Pointer,
    /// Touch: double-tap to select and grab; single taps never select.
    Touch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_directions() {
        assert_eq!(Key::ArrowLeft.direction(), Some(Direction::Left));
        assert_eq!(KeyEvent::shifted(Key::ArrowUp).modifiers, Modifiers::SHIFT);
        assert_eq!(Key::Grow.direction(), None);
    }
}
