//! Display formatting for raw operands
//!
//! Purely cosmetic: the integer part gets en-US thousands separators and the
//! fractional digits are reattached exactly as typed.

/// Thousands separator for the integer part
pub const GROUP_SEPARATOR: char = ',';

/// Formats a raw operand for display
///
/// ```rust
/// use grid_calculator::core::format_operand;
///
/// assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
/// assert_eq!(format_operand(None), None);
/// ```
#[must_use]
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    if operand.is_empty() {
        return Some(String::new());
    }

    let formatted = match operand.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_integer(integer)),
        None => group_integer(operand),
    };
    Some(formatted)
}

/// Groups the digits of an integer string in threes
///
/// Leading zeros are dropped and an empty part renders as `0`. Tokens that
/// are not plain digits (`Infinity`, `NaN`) pass through untouched.
fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return format!("{sign}0");
    }

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
