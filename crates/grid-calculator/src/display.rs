//! Two-line calculator display
//!
//! The previous line shows the formatted left operand followed by the
//! pending operator; the current line shows the formatted operand being
//! typed (or the last result).

use serde::{Deserialize, Serialize};

use crate::core::{format_operand, CalculatorState};

/// Rendered display contents for one state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLines {
    /// Formatted previous operand and operator symbol
    pub previous_line: String,
    /// Formatted current operand
    pub current_line: String,
}

impl DisplayLines {
    /// Builds the display for a state
    #[must_use]
    pub fn from_state(state: &CalculatorState) -> Self {
        let previous = format_operand(state.previous_operand.as_deref());
        let symbol = state.operation.map(|op| op.symbol().to_string());

        let previous_line = [previous, symbol]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            previous_line,
            current_line: format_operand(state.current_operand.as_deref()).unwrap_or_default(),
        }
    }

    /// Returns true when both lines are blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.previous_line.is_empty() && self.current_line.is_empty()
    }
}

impl From<&CalculatorState> for DisplayLines {
    fn from(state: &CalculatorState) -> Self {
        Self::from_state(state)
    }
}

impl std::fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.previous_line)?;
        write!(f, "{}", self.current_line)
    }
}
