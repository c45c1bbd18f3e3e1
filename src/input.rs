use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;

/// One-shot game actions triggered by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Fire,
    Pause,
    Resume,
    Restart,
    Quit,
}

/// Movement keys that can be held down for continuous input. These become
/// the ship's movement flags each frame.
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
}

/// Polls crossterm events and translates raw key events into game actions.
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls all pending input events without blocking. Call once per frame
    /// before reading actions or held keys.
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => {
                    self.handle_key_event(key_event, game_state);
                }
                // Everything else (mouse, resize, ...) is ignored.
                _ => {}
            }
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: GameState) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, game_state);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event.code);
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        // Quit keys work in any state.
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match game_state {
            GameState::Playing => {
                if matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.oneshot_actions.push(InputAction::Pause);
                    return;
                }
            }
            GameState::Paused => {
                if matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.oneshot_actions.push(InputAction::Resume);
                    return;
                }
            }
            GameState::GameOver => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.oneshot_actions.push(InputAction::Restart);
                    return;
                }
            }
        }

        // Gameplay keys only matter while playing.
        if game_state == GameState::Playing {
            match key_event.code {
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.key_state.left = true;
                    self.key_state.right = false;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.key_state.right = true;
                    self.key_state.left = false;
                }
                // Firing is a discrete command per press; the bullet cap is
                // enforced by the resolver, not here.
                KeyCode::Char(' ') => {
                    self.oneshot_actions.push(InputAction::Fire);
                }
                _ => {}
            }
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            _ => {}
        }
    }

    /// One-shot actions collected by the last `poll_events` call.
    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }

    pub fn left_held(&self) -> bool {
        self.key_state.left
    }

    pub fn right_held(&self) -> bool {
        self.key_state.right
    }
}
