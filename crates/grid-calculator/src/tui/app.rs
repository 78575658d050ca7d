//! TUI application state
//!
//! Owns the single `CalculatorState` value and replaces it wholesale on
//! every keypad activation.

use ratatui::layout::Rect;

use super::input::UiAction;
use super::keypad::{FocusDirection, Keypad};
use crate::core::{CalculatorState, Event};
use crate::dispatch::{dispatch, resolve_label};
use crate::display::DisplayLines;
use crate::error::{AppError, AppResult};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Calculation in progress
    state: CalculatorState,
    /// Button grid (pressed highlight lives here)
    keypad: Keypad,
    /// Index of the focused keypad button
    focus: usize,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app in the initial state, focused on `AC`
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: Keypad::new(),
            focus: 0,
            should_quit: false,
        }
    }

    /// Returns the calculation state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the formatted display
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        DisplayLines::from_state(&self.state)
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the focused button index
    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Activates a keypad button by index, returning the issued event
    pub fn press_button(&mut self, index: usize) -> Option<Event> {
        let button = self.keypad.get_button(index)?;
        let (label, event) = (button.label, button.event);
        self.keypad.release_all();
        self.keypad.press_button(index);
        self.focus = index;
        self.state = dispatch(std::mem::take(&mut self.state), label, event);
        Some(event)
    }

    /// Activates the keypad button with the given label
    pub fn press_label(&mut self, label: &str) -> AppResult<Event> {
        let index = resolve_label(&self.keypad, label)?;
        self.press_button(index)
            .ok_or_else(|| AppError::unknown_trigger(label))
    }

    /// Activates the focused button
    pub fn activate_focused(&mut self) -> Option<Event> {
        self.press_button(self.focus)
    }

    /// Moves focus to the neighboring button, staying put at the edges
    pub fn move_focus(&mut self, direction: FocusDirection) {
        if let Some(next) = self.keypad.neighbor(self.focus, direction) {
            self.focus = next;
        }
    }

    /// Activates the button under a click inside the rendered keypad area
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Event> {
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        self.press_button(index)
    }

    /// Handles one UI action; the pressed highlight lasts until the next one
    pub fn handle(&mut self, action: UiAction, keypad_area: Rect) {
        if action != UiAction::None {
            self.keypad.release_all();
        }

        match action {
            UiAction::Focus(direction) => self.move_focus(direction),
            UiAction::Activate => {
                self.activate_focused();
            }
            UiAction::Click { x, y } => {
                self.click(keypad_area, x, y);
            }
            UiAction::Quit => self.quit(),
            UiAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(app: &mut CalculatorApp, labels: &[&str]) {
        for label in labels {
            app.press_label(label).unwrap();
        }
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert!(app.state().is_initial());
        assert!(app.display().is_blank());
        assert_eq!(app.focus(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_default() {
        let app = CalculatorApp::default();
        assert!(app.state().is_initial());
    }

    // ===== Dispatch =====

    #[test]
    fn test_press_label_updates_display() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["1", "2", "3", "4", ".", "5"]);
        assert_eq!(app.display().current_line, "1,234.5");
    }

    #[test]
    fn test_press_label_returns_event() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.press_label("=").unwrap(), Event::Evaluate);
        assert_eq!(app.press_label("AC").unwrap(), Event::Clear);
    }

    #[test]
    fn test_press_unknown_label() {
        let mut app = CalculatorApp::new();
        let err = app.press_label("sqrt").unwrap_err();
        assert!(matches!(err, AppError::UnknownTrigger { .. }));
        assert!(app.state().is_initial());
    }

    #[test]
    fn test_press_button_highlights_and_focuses() {
        let mut app = CalculatorApp::new();
        let seven = app.keypad().find_button_by_label("7").unwrap();
        app.press_button(seven);
        assert_eq!(app.focus(), seven);
        assert!(app.keypad().get_button(seven).unwrap().pressed);
        assert_eq!(app.keypad().buttons().filter(|b| b.pressed).count(), 1);
    }

    #[test]
    fn test_press_button_out_of_range() {
        let mut app = CalculatorApp::new();
        assert!(app.press_button(100).is_none());
        assert!(app.state().is_initial());
    }

    #[test]
    fn test_full_calculation() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &["2", "+", "3", "+"]);
        assert_eq!(app.display().previous_line, "5 +");
        press_all(&mut app, &["4", "="]);
        assert_eq!(app.display().current_line, "9");
        assert!(app.state().overwrite);
    }

    // ===== Focus =====

    #[test]
    fn test_move_focus_and_activate() {
        let mut app = CalculatorApp::new();
        app.move_focus(FocusDirection::Down); // AC -> 1
        app.move_focus(FocusDirection::Right); // 1 -> 2
        assert_eq!(app.activate_focused(), app.keypad().get_button(4).map(|b| b.event));
        assert_eq!(app.display().current_line, "2");
    }

    #[test]
    fn test_move_focus_stops_at_edge() {
        let mut app = CalculatorApp::new();
        app.move_focus(FocusDirection::Up);
        app.move_focus(FocusDirection::Left);
        assert_eq!(app.focus(), 0);
    }

    // ===== handle =====

    #[test]
    fn test_handle_quit() {
        let mut app = CalculatorApp::new();
        app.handle(UiAction::Quit, Rect::default());
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_click_on_keypad() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 22, 12);
        // row 2, col 1 -> "5"
        app.handle(UiAction::Click { x: 6, y: 5 }, area);
        assert_eq!(app.display().current_line, "5");
    }

    #[test]
    fn test_handle_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        app.handle(UiAction::Click { x: 50, y: 50 }, Rect::new(0, 0, 22, 12));
        assert!(app.state().is_initial());
    }

    #[test]
    fn test_handle_releases_highlight_on_next_action() {
        let mut app = CalculatorApp::new();
        app.handle(UiAction::Activate, Rect::default());
        assert!(app.keypad().get_button(0).unwrap().pressed);
        app.handle(UiAction::Focus(FocusDirection::Right), Rect::default());
        assert!(app.keypad().buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_handle_none_keeps_highlight() {
        let mut app = CalculatorApp::new();
        app.handle(UiAction::Activate, Rect::default());
        app.handle(UiAction::None, Rect::default());
        assert!(app.keypad().get_button(0).unwrap().pressed);
    }
}
