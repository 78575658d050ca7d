//! Property-based tests for the calculation state machine and formatter

use grid_calculator::core::{format_operand, CalculatorState, Digit, Event, Operation};
use grid_calculator::display::DisplayLines;
use grid_calculator::tui::{FocusDirection, Keypad};
use proptest::prelude::*;
use ratatui::layout::Rect;

// ===== Strategy definitions =====

/// Any keypad digit, decimal point included
fn digit_strategy() -> impl Strategy<Value = Digit> {
    prop_oneof![
        9 => (0u8..=9u8).prop_map(|d| Digit::decimal(d).unwrap()),
        1 => Just(Digit::POINT),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        6 => digit_strategy().prop_map(Event::AddDigit),
        1 => Just(Event::Clear),
        1 => Just(Event::DeleteDigit),
        2 => operation_strategy().prop_map(Event::ChooseOperation),
        2 => Just(Event::Evaluate),
    ]
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(event_strategy(), 0..40)
}

/// Any state reachable from the initial one
fn reachable_state() -> impl Strategy<Value = CalculatorState> {
    events_strategy().prop_map(|events| CalculatorState::new().apply_all(events))
}

fn point_count(operand: Option<&str>) -> usize {
    operand.map_or(0, |s| s.matches('.').count())
}

// ===== State machine properties =====

proptest! {
    #[test]
    fn prop_clear_always_resets(state in reachable_state()) {
        prop_assert!(state.apply(Event::Clear).is_initial());
    }

    #[test]
    fn prop_operands_have_at_most_one_point(state in reachable_state()) {
        prop_assert!(point_count(state.current_operand.as_deref()) <= 1);
        prop_assert!(point_count(state.previous_operand.as_deref()) <= 1);
    }

    #[test]
    fn prop_no_leading_zero_runs(state in reachable_state()) {
        if let Some(current) = state.current_operand.as_deref() {
            prop_assert!(!current.starts_with("00"));
        }
    }

    #[test]
    fn prop_operation_implies_previous_operand(state in reachable_state()) {
        if state.operation.is_some() {
            prop_assert!(state.previous_operand.is_some());
        }
    }

    #[test]
    fn prop_digit_after_overwrite_starts_fresh(
        state in reachable_state(),
        digit in digit_strategy(),
    ) {
        let state = CalculatorState {
            current_operand: Some(state.current_operand.unwrap_or_else(|| "12".into())),
            overwrite: true,
            ..state
        };
        let next = state.clone().apply(Event::AddDigit(digit));
        prop_assert_eq!(next.current_operand, Some(digit.to_string()));
        prop_assert!(!next.overwrite);
        prop_assert_eq!(next.previous_operand, state.previous_operand);
        prop_assert_eq!(next.operation, state.operation);
    }

    #[test]
    fn prop_zero_on_zero_is_noop(state in reachable_state()) {
        let state = CalculatorState {
            current_operand: Some("0".into()),
            overwrite: false,
            ..state
        };
        let next = state.clone().apply(Event::AddDigit(Digit::ZERO));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_delete_without_operand_is_noop(state in reachable_state()) {
        let state = CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state
        };
        let next = state.clone().apply(Event::DeleteDigit);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_delete_after_digit_restores_operand(
        state in reachable_state(),
        digit in digit_strategy(),
    ) {
        prop_assume!(!state.overwrite);
        let typed = state.clone().apply(Event::AddDigit(digit));
        prop_assume!(typed != state);
        prop_assert_eq!(typed.apply(Event::DeleteDigit), state);
    }

    #[test]
    fn prop_evaluate_without_operation_is_noop(state in reachable_state()) {
        prop_assume!(state.operation.is_none());
        let next = state.clone().apply(Event::Evaluate);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_evaluate_completes_operation(
        lhs in 0u32..100_000,
        rhs in 1u32..100_000,
        op in operation_strategy(),
    ) {
        let state = CalculatorState {
            current_operand: Some(rhs.to_string()),
            previous_operand: Some(lhs.to_string()),
            operation: Some(op),
            overwrite: false,
        };
        let next = state.apply(Event::Evaluate);
        let expected = op.apply(f64::from(lhs), f64::from(rhs));
        let actual: f64 = next.current_operand.as_deref().unwrap().parse().unwrap();
        prop_assert_eq!(actual, expected);
        prop_assert!(next.previous_operand.is_none());
        prop_assert!(next.operation.is_none());
        prop_assert!(next.overwrite);
    }

    #[test]
    fn prop_transitions_are_deterministic(events in events_strategy()) {
        let a = CalculatorState::new().apply_all(events.iter().copied());
        let b = CalculatorState::new().apply_all(events);
        prop_assert_eq!(a, b);
    }
}

// ===== Formatter properties =====

proptest! {
    #[test]
    fn prop_format_preserves_integer_digits(digits in "[1-9][0-9]{0,15}") {
        let formatted = format_operand(Some(&digits)).unwrap();
        prop_assert_eq!(formatted.replace(',', ""), digits.clone());
        prop_assert_eq!(formatted.matches(',').count(), (digits.len() - 1) / 3);
    }

    #[test]
    fn prop_format_keeps_fraction_verbatim(
        integer in "[0-9]{0,9}",
        fraction in "[0-9]{0,9}",
    ) {
        let raw = format!("{integer}.{fraction}");
        let formatted = format_operand(Some(&raw)).unwrap();
        let expected_suffix = format!(".{fraction}");
        prop_assert!(formatted.ends_with(&expected_suffix));
        prop_assert!(!formatted.starts_with('.'));
    }

    #[test]
    fn prop_format_groups_have_three_digits(digits in "[1-9][0-9]{3,15}") {
        let formatted = format_operand(Some(&digits)).unwrap();
        let groups: Vec<&str> = formatted.split(',').collect();
        prop_assert!(groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn prop_display_never_shows_dangling_space(state in reachable_state()) {
        let display = DisplayLines::from_state(&state);
        prop_assert_eq!(display.previous_line.trim(), display.previous_line.as_str());
    }
}

// ===== Keypad geometry properties =====

proptest! {
    #[test]
    fn prop_every_label_finds_its_button(index in 0usize..18) {
        let keypad = Keypad::new();
        let label = keypad.get_button(index).unwrap().label;
        prop_assert_eq!(keypad.find_button_by_label(label), Some(index));
        prop_assert_eq!(keypad.find_button_by_label(&label.to_lowercase()), Some(index));
    }

    #[test]
    fn prop_neighbors_stay_on_keypad(
        index in 0usize..18,
        direction in prop_oneof![
            Just(FocusDirection::Up),
            Just(FocusDirection::Down),
            Just(FocusDirection::Left),
            Just(FocusDirection::Right),
        ],
    ) {
        let keypad = Keypad::new();
        if let Some(next) = keypad.neighbor(index, direction) {
            prop_assert!(next < keypad.button_count());
            prop_assert_ne!(next, index);
        }
    }

    #[test]
    fn prop_hit_test_covers_grid(
        width in 6u16..80,
        height in 7u16..40,
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        let area = Rect::new(0, 0, width, height);
        let cell_w = (width - 2) / cols as u16;
        let cell_h = (height - 2) / rows as u16;
        let x = 1 + (fx * f64::from(cell_w * cols as u16)) as u16;
        let y = 1 + (fy * f64::from(cell_h * rows as u16)) as u16;
        prop_assert!(keypad.hit_test(area, x, y).is_some());
    }

    #[test]
    fn prop_hit_test_outside_is_none(x in 100u16..200, y in 0u16..200) {
        let keypad = Keypad::new();
        prop_assert!(keypad.hit_test(Rect::new(0, 0, 40, 20), x, y).is_none());
    }
}
