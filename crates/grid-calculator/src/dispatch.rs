//! Keypad activation shared by every front end
//!
//! Both the headless driver behind `press` and the TUI application resolve
//! labels and apply events here, so they log the same way.

use tracing::{debug, warn};

use crate::core::{transition, CalculatorState, Event};
use crate::display::DisplayLines;
use crate::error::{AppError, AppResult};
use crate::tui::Keypad;

/// Finds the keypad button for a label
///
/// Unknown labels are logged at `warn` and returned as
/// [`AppError::UnknownTrigger`].
pub fn resolve_label(keypad: &Keypad, label: &str) -> AppResult<usize> {
    keypad.find_button_by_label(label).ok_or_else(|| {
        warn!(label = %label, "no keypad button with this label");
        AppError::unknown_trigger(label)
    })
}

/// Applies the event issued by a labeled button and logs the outcome
#[must_use]
pub fn dispatch(state: CalculatorState, label: &str, event: Event) -> CalculatorState {
    let next = transition(state, event);
    let lines = DisplayLines::from_state(&next);
    debug!(
        label = %label,
        ?event,
        previous = %lines.previous_line,
        current = %lines.current_line,
        "dispatched"
    );
    next
}
