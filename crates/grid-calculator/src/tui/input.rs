//! Terminal input mapping
//!
//! Keys never type digits or operators; they only move focus across the
//! keypad and activate the focused button. Mouse clicks activate the button
//! under the pointer.

use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::keypad::FocusDirection;

/// Actions the front end can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move keypad focus
    Focus(FocusDirection),
    /// Activate the focused button
    Activate,
    /// Left click at a terminal position
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps terminal events to UI actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &TermEvent) -> UiAction {
        match event {
            TermEvent::Key(key) => self.handle_key(*key),
            TermEvent::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => UiAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> UiAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return UiAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => UiAction::Quit,
                _ => UiAction::None,
            };
        }

        match code {
            KeyCode::Up | KeyCode::Char('k') => UiAction::Focus(FocusDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => UiAction::Focus(FocusDirection::Down),
            KeyCode::Left | KeyCode::Char('h') => UiAction::Focus(FocusDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => UiAction::Focus(FocusDirection::Right),
            KeyCode::Enter | KeyCode::Char(' ') => UiAction::Activate,
            KeyCode::Esc | KeyCode::Char('q') => UiAction::Quit,
            _ => UiAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> UiAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => UiAction::Click {
                x: event.column,
                y: event.row,
            },
            _ => UiAction::None,
        }
    }
}
