//! Grid Calculator
//!
//! An arithmetic calculator driven by a grid of buttons. The interesting
//! part is the state machine in [`core`]: a pure function from
//! `(state, event)` to the next state that decides how button presses
//! accumulate into operands, operators and results. Everything else
//! (keypad, terminal front end, CLI) feeds events in and renders the
//! [`display::DisplayLines`] that come out.
//!
//! # Example
//!
//! ```rust
//! use grid_calculator::prelude::*;
//!
//! let state = CalculatorState::new()
//!     .apply(Event::AddDigit(Digit::decimal(2).unwrap()))
//!     .apply(Event::ChooseOperation(Operation::Add))
//!     .apply(Event::AddDigit(Digit::decimal(3).unwrap()))
//!     .apply(Event::ChooseOperation(Operation::Add))
//!     .apply(Event::AddDigit(Digit::decimal(4).unwrap()))
//!     .apply(Event::Evaluate);
//! assert_eq!(state.current_operand.as_deref(), Some("9"));
//!
//! // Same thing through keypad labels
//! let mut driver = HeadlessDriver::new();
//! driver.press_all(&["1", "2", "3", "4", ".", "5"]).unwrap();
//! assert_eq!(driver.display().current_line, "1,234.5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod display;
pub mod driver;
pub mod error;
pub mod logging;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_operand, transition, CalculatorState, Digit, Event, Operation,
    };
    pub use crate::display::DisplayLines;
    pub use crate::driver::{CalculatorDriver, HeadlessDriver, TuiDriver};
    pub use crate::error::{AppError, AppResult};
    pub use crate::tui::{CalculatorApp, Keypad};
}
