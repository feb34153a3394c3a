//! Per-frame input collection.
//!
//! Terminals deliver key events one at a time, the simulation wants one
//! [`InputSnapshot`] per step. Every press seen between two steps is OR-ed into
//! the pending snapshot, which the frame loop takes once per step.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::InputSnapshot;

/// What a single key event asks of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Mapped to a game action and recorded
    Recorded,
    /// Not bound, or a release
    Ignored,
    /// The player asked to leave
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    pending: InputSnapshot,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event.
    ///
    /// Repeats count as presses so a held key keeps acting; releases are
    /// dropped since not every terminal reports them.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyResponse {
        if key.kind == KeyEventKind::Release {
            return KeyResponse::Ignored;
        }
        if should_quit(key) {
            return KeyResponse::Quit;
        }
        match handle_key_event(key) {
            Some(action) => {
                self.pending.press(action);
                KeyResponse::Recorded
            }
            None => KeyResponse::Ignored,
        }
    }

    /// Input collected so far, without consuming it
    pub fn pending(&self) -> &InputSnapshot {
        &self.pending
    }

    /// Hand the collected input to a step and start over
    pub fn take(&mut self) -> InputSnapshot {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameAction;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_presses_accumulate_until_taken() {
        let mut input = InputCollector::new();
        assert_eq!(
            input.handle_key(KeyEvent::from(KeyCode::Left)),
            KeyResponse::Recorded
        );
        assert_eq!(
            input.handle_key(KeyEvent::from(KeyCode::Char('z'))),
            KeyResponse::Recorded
        );
        assert_eq!(
            input.handle_key(KeyEvent::from(KeyCode::Left)),
            KeyResponse::Recorded
        );

        let snapshot = input.take();
        assert_eq!(
            snapshot,
            [GameAction::MoveLeft, GameAction::RotateCw]
                .into_iter()
                .collect::<InputSnapshot>()
        );
        assert!(input.pending().is_empty());
        assert!(input.take().is_empty());
    }

    #[test]
    fn test_repeat_counts_release_does_not() {
        let mut input = InputCollector::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Right, KeyEventKind::Release)),
            KeyResponse::Ignored
        );
        assert!(input.pending().is_empty());

        assert_eq!(
            input.handle_key(key(KeyCode::Right, KeyEventKind::Repeat)),
            KeyResponse::Recorded
        );
        assert!(input.take().move_right);
    }

    #[test]
    fn test_quit_and_unbound_keys() {
        let mut input = InputCollector::new();
        assert_eq!(
            input.handle_key(KeyEvent::from(KeyCode::Esc)),
            KeyResponse::Quit
        );
        assert_eq!(
            input.handle_key(KeyEvent::from(KeyCode::Char('m'))),
            KeyResponse::Ignored
        );
        assert!(input.pending().is_empty());
    }
}
