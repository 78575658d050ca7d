//! Calculation state machine
//!
//! `transition` is a pure function `(CalculatorState, Event) -> CalculatorState`.
//! Out-of-sequence events are no-ops that hand back the unchanged state, so
//! every input has a defined next state and nothing here can fail.

use serde::{Deserialize, Serialize};

use super::operations::{Digit, Operation};

/// Input events issued by the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Event {
    /// Append a digit or decimal point to the current operand
    AddDigit(Digit),
    /// Reset to the initial state
    Clear,
    /// Remove the last character of the current operand
    DeleteDigit,
    /// Select the pending binary operator
    ChooseOperation(Operation),
    /// Compute the pending operation
    Evaluate,
}

/// Calculation in progress
///
/// Each transition consumes the old value and returns a new one; the
/// initial state is `CalculatorState::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Digits typed since the last operator or evaluation
    pub current_operand: Option<String>,
    /// Left-hand side of the pending operation, or the last chained result
    pub previous_operand: Option<String>,
    /// Pending binary operator
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of appending
    pub overwrite: bool,
}

impl CalculatorState {
    /// Creates the initial (empty) state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if this is the initial state
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    /// Applies one event, see [`transition`]
    #[must_use]
    pub fn apply(self, event: Event) -> Self {
        transition(self, event)
    }

    /// Applies a sequence of events in order
    #[must_use]
    pub fn apply_all(self, events: impl IntoIterator<Item = Event>) -> Self {
        events.into_iter().fold(self, transition)
    }
}

/// Maps the current state and an input event to the next state
#[must_use]
pub fn transition(state: CalculatorState, event: Event) -> CalculatorState {
    match event {
        Event::AddDigit(digit) => add_digit(state, digit),
        Event::Clear => CalculatorState::default(),
        Event::DeleteDigit => delete_digit(state),
        Event::ChooseOperation(op) => choose_operation(state, op),
        Event::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state
        };
    }

    let rejected = state.current_operand.as_deref().is_some_and(|current| {
        // no leading-zero runs, at most one decimal point
        (digit == Digit::ZERO && current == "0") || (digit.is_point() && current.contains('.'))
    });
    if rejected {
        return state;
    }

    let mut current = state.current_operand.unwrap_or_default();
    current.push(digit.as_char());
    CalculatorState {
        current_operand: Some(current),
        ..state
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state
        };
    }

    let trimmed = match state.current_operand.as_deref() {
        None => return state,
        Some(current) => {
            let mut chars = current.chars();
            chars.next_back();
            let rest = chars.as_str();
            (!rest.is_empty()).then(|| rest.to_string())
        }
    };

    CalculatorState {
        current_operand: trimmed,
        ..state
    }
}

fn choose_operation(state: CalculatorState, op: Operation) -> CalculatorState {
    match (state.current_operand.is_some(), state.previous_operand.is_some()) {
        (false, false) => state,
        // operator already pending: the user changed their mind
        (false, true) => CalculatorState {
            operation: Some(op),
            ..state
        },
        (true, false) => CalculatorState {
            previous_operand: state.current_operand,
            current_operand: None,
            operation: Some(op),
            ..state
        },
        // chain left-to-right without an explicit equals
        (true, true) => {
            let result = evaluate(&state);
            CalculatorState {
                previous_operand: Some(result),
                current_operand: None,
                operation: Some(op),
                ..state
            }
        }
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state;
    }

    CalculatorState {
        current_operand: Some(evaluate(&state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

/// Computes `previous_operand <operation> current_operand` as a string
///
/// Returns an empty string when either operand is missing or does not parse
/// as a number (for example a lone `"."`). Division by zero is not an error:
/// the infinite or NaN result is rendered as `Infinity`, `-Infinity` or `NaN`.
#[must_use]
pub fn evaluate(state: &CalculatorState) -> String {
    let lhs = state.previous_operand.as_deref().and_then(parse_operand);
    let rhs = state.current_operand.as_deref().and_then(parse_operand);

    match (lhs, rhs, state.operation) {
        (Some(lhs), Some(rhs), Some(op)) => number_to_string(op.apply(lhs, rhs)),
        _ => String::new(),
    }
}

/// Parses an operand, treating `NaN` tokens as unparseable
fn parse_operand(operand: &str) -> Option<f64> {
    operand.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Canonical decimal rendering of a computed value
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // folds -0 into 0
        "0".to_string()
    } else {
        value.to_string()
    }
}
