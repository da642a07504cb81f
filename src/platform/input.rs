//! Keyboard input
//!
//! Terminals report key presses (and auto-repeat), not held keys. A press
//! counts as "held" for the tick it arrives in, so holding a key down moves
//! its nut at the terminal's repeat rate.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::TickInput;

/// Control a key maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RaiseLeft,
    LowerLeft,
    RaiseRight,
    LowerRight,
    Acknowledge,
    Exit,
}

/// Key layout. The defaults mirror the cabinet's two pairs of buttons.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        Self {
            bindings: vec![
                (KeyCode::Char('1'), RaiseLeft),
                (KeyCode::Char('q'), LowerLeft),
                (KeyCode::Char('='), RaiseRight),
                (KeyCode::Char('['), LowerRight),
                (KeyCode::Char('w'), RaiseLeft),
                (KeyCode::Char('s'), LowerLeft),
                (KeyCode::Char('o'), RaiseRight),
                (KeyCode::Char('l'), LowerRight),
                (KeyCode::Char(' '), Acknowledge),
                (KeyCode::Enter, Acknowledge),
                (KeyCode::Esc, Exit),
            ],
        }
    }
}

impl KeyBindings {
    pub fn action(&self, key: &KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Action::Exit);
        }
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

/// Collects key presses between ticks
#[derive(Debug, Default)]
pub struct InputLatch {
    bindings: KeyBindings,
    pending: TickInput,
    exit_requested: bool,
}

impl InputLatch {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pending: TickInput::default(),
            exit_requested: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        let Some(action) = self.bindings.action(&key) else {
            return;
        };
        let lever = &mut self.pending.lever;
        match action {
            Action::RaiseLeft => lever.raise_left = true,
            Action::LowerLeft => lever.lower_left = true,
            Action::RaiseRight => lever.raise_right = true,
            Action::LowerRight => lever.lower_right = true,
            Action::Acknowledge => self.pending.acknowledge = true,
            Action::Exit => self.exit_requested = true,
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Take the snapshot for this tick and start collecting the next one
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
