//! Binary operators and digit input
//!
//! Both types are closed sets: an `Operation` is always one of the four
//! keypad operators and a `Digit` is always `0`-`9` or the decimal point.

use serde::{Deserialize, Serialize};

/// Pending binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (÷)
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Add, Self::Subtract];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "÷",
        }
    }

    /// Parses an operator symbol; `/` is accepted for division
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator with IEEE-754 semantics (division by zero
    /// yields an infinity or NaN)
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single digit-entry character: `0`-`9` or `.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point
    pub const POINT: Self = Self('.');

    /// The zero digit
    pub const ZERO: Self = Self('0');

    /// Creates a digit from a character, rejecting anything outside `0-9` and `.`
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    /// Creates a numeric digit from its value (0-9)
    #[must_use]
    pub fn decimal(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(Self)
    }

    /// Returns the character this digit appends
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns true for the decimal point
    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or_else(|| format!("not a keypad digit: {c:?}"))
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
