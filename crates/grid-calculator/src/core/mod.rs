//! Calculator core: the transition function and the display formatter
//!
//! Everything in here is pure. No I/O, no logging, no errors: invalid or
//! out-of-sequence input is absorbed as a no-op.

pub mod format;
mod operations;
pub mod state;

pub use format::format_operand;
pub use operations::{Digit, Operation};
pub use state::{evaluate, transition, CalculatorState, Event};
