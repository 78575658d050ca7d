//! Calculator drivers
//!
//! A driver presses labeled keypad buttons and reads back the display. The
//! same scenarios (`verify_*`) run against the headless core and against
//! the TUI application, so both front ends are held to identical behavior.

use serde::Serialize;

use crate::core::{CalculatorState, Event};
use crate::dispatch::{dispatch, resolve_label};
use crate::display::DisplayLines;
use crate::error::{AppError, AppResult};
use crate::tui::{CalculatorApp, Keypad};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the keypad button with the given label
    fn press(&mut self, label: &str) -> AppResult<Event>;

    /// Returns the current calculation state
    fn state(&self) -> CalculatorState;

    /// Returns the formatted display
    fn display(&self) -> DisplayLines {
        DisplayLines::from_state(&self.state())
    }

    /// Presses several buttons in order, stopping at the first unknown label
    fn press_all(&mut self, labels: &[&str]) -> AppResult<()> {
        for label in labels {
            self.press(label)?;
        }
        Ok(())
    }

    /// Returns to the initial state by pressing `AC`
    fn reset(&mut self) -> AppResult<()> {
        self.press("AC").map(|_| ())
    }
}

/// Driver over the pure core; records the issued events
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    keypad: Keypad,
    state: CalculatorState,
    events: Vec<Event>,
}

impl HeadlessDriver {
    /// Creates a driver in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events issued so far, oldest first
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Snapshot of the session for JSON output
    #[must_use]
    pub fn report(&self) -> PressReport {
        PressReport {
            events: self.events.clone(),
            state: self.state.clone(),
            display: self.display(),
        }
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, label: &str) -> AppResult<Event> {
        let index = resolve_label(&self.keypad, label)?;
        let button = self
            .keypad
            .get_button(index)
            .ok_or_else(|| AppError::unknown_trigger(label))?;
        let event = button.event;

        self.state = dispatch(std::mem::take(&mut self.state), button.label, event);
        self.events.push(event);
        Ok(event)
    }

    fn state(&self) -> CalculatorState {
        self.state.clone()
    }
}

/// Driver that goes through the TUI application and its keypad
#[derive(Debug, Default)]
pub struct TuiDriver {
    app: CalculatorApp,
}

impl TuiDriver {
    /// Creates a new TUI driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }
}

impl CalculatorDriver for TuiDriver {
    fn press(&mut self, label: &str) -> AppResult<Event> {
        self.app.press_label(label)
    }

    fn state(&self) -> CalculatorState {
        self.app.state().clone()
    }

    fn display(&self) -> DisplayLines {
        self.app.display()
    }
}

/// Result of replaying a sequence of presses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressReport {
    /// Events issued, oldest first
    pub events: Vec<Event>,
    /// Final calculation state
    pub state: CalculatorState,
    /// Final display
    pub display: DisplayLines,
}

// ===== Shared scenarios =====

fn run<D: CalculatorDriver>(driver: &mut D, labels: &[&str]) -> DisplayLines {
    driver.reset().expect("keypad has an AC button");
    driver
        .press_all(labels)
        .expect("scenario uses keypad labels only");
    driver.display()
}

/// Verifies the four operators through EVALUATE
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, &["6", "÷", "3", "="]).current_line, "2");
    assert_eq!(run(driver, &["7", "-", "9", "="]).current_line, "-2");
    assert_eq!(run(driver, &["1", ".", "5", "*", "4", "="]).current_line, "6");
    assert_eq!(run(driver, &["2", "+", "2", "="]).current_line, "4");
}

/// Verifies left-to-right chaining without an equals press
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    let display = run(driver, &["2", "+", "3", "+"]);
    assert_eq!(display.previous_line, "5 +");
    assert_eq!(display.current_line, "");

    driver.press_all(&["4", "="]).expect("keypad labels");
    assert_eq!(driver.display().current_line, "9");
}

/// Verifies that changing the operator before the next operand replaces it
pub fn verify_operator_change<D: CalculatorDriver>(driver: &mut D) {
    let display = run(driver, &["8", "+", "-", "*"]);
    assert_eq!(display.previous_line, "8 *");
}

/// Verifies that a digit after EVALUATE starts a fresh number
pub fn verify_overwrite_after_evaluate<D: CalculatorDriver>(driver: &mut D) {
    run(driver, &["4", "*", "4", "="]);
    assert!(driver.state().overwrite);
    driver.press("5").expect("keypad label");
    assert_eq!(driver.display().current_line, "5");
    assert!(!driver.state().overwrite);
}

/// Verifies DEL trimming and the discard-result rule
pub fn verify_delete<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, &["1", "2", "DEL"]).current_line, "1");
    driver.press("DEL").expect("keypad label");
    assert_eq!(driver.state().current_operand, None);

    run(driver, &["9", "-", "1", "="]);
    driver.press("DEL").expect("keypad label");
    assert_eq!(driver.state().current_operand, None);
}

/// Verifies the leading-zero and single-decimal-point guards
pub fn verify_entry_guards<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, &["0", "0", "0"]).current_line, "0");
    assert_eq!(run(driver, &["3", ".", ".", "1", "."]).current_line, "3.1");
}

/// Verifies thousands grouping on both lines
pub fn verify_grouped_display<D: CalculatorDriver>(driver: &mut D) {
    let display = run(driver, &["1", "2", "3", "4", ".", "5"]);
    assert_eq!(display.current_line, "1,234.5");

    driver.press("+").expect("keypad label");
    assert_eq!(driver.display().previous_line, "1,234.5 +");
}

/// Verifies floating-point division by zero
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(run(driver, &["1", "÷", "0", "="]).current_line, "Infinity");
    assert_eq!(run(driver, &["0", "÷", "0", "="]).current_line, "NaN");
}

/// Verifies that AC always returns to the initial state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    run(driver, &["5", "*", "5", "=", "+"]);
    driver.press("AC").expect("keypad label");
    assert!(driver.state().is_initial());
    assert!(driver.display().is_blank());
}

/// Runs every scenario
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chained_operations(driver);
    verify_operator_change(driver);
    verify_overwrite_after_evaluate(driver);
    verify_delete(driver);
    verify_entry_guards(driver);
    verify_grouped_display(driver);
    verify_division_by_zero(driver);
    verify_clear(driver);
}
