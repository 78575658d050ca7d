//! Button grid for the calculator
//!
//! Every button is bound to exactly one core [`Event`]. The grid is 5 rows
//! by 4 columns; `AC` and `=` each span two columns:
//!
//! ```text
//! [   AC    ] [DEL] [ ÷ ]
//! [ 1 ] [ 2 ] [ 3 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ . ] [ 0 ] [    =    ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Digit, Event, Operation};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: &'static str,
    /// Event issued when the button is activated
    pub event: Event,
    /// Grid row
    pub row: usize,
    /// Leftmost grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted as pressed
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, event: Event) -> Self {
        Self {
            label,
            event,
            row: 0,
            col: 0,
            span: 1,
            pressed: false,
        }
    }

    /// Creates a digit button (0-9); out-of-range values fall back to 0
    #[must_use]
    pub fn digit(d: u8) -> Self {
        let digit = Digit::decimal(d).unwrap_or(Digit::ZERO);
        let label = DIGIT_LABELS[usize::from(d.min(9))];
        Self::new(label, Event::AddDigit(digit))
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn point() -> Self {
        Self::new(".", Event::AddDigit(Digit::POINT))
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operation) -> Self {
        Self::new(op.symbol(), Event::ChooseOperation(op))
    }

    /// Creates the all-clear button
    #[must_use]
    pub fn clear() -> Self {
        Self::new("AC", Event::Clear)
    }

    /// Creates the delete button
    #[must_use]
    pub fn delete() -> Self {
        Self::new("DEL", Event::DeleteDigit)
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals() -> Self {
        Self::new("=", Event::Evaluate)
    }

    /// Makes the button cover `span` columns
    #[must_use]
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Direction for moving keyboard focus across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// One row up
    Up,
    /// One row down
    Down,
    /// One button left
    Left,
    /// One button right
    Right,
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        Self::from_rows(vec![
            vec![
                KeypadButton::clear().spanning(2),
                KeypadButton::delete(),
                KeypadButton::operator(Operation::Divide),
            ],
            vec![
                KeypadButton::digit(1),
                KeypadButton::digit(2),
                KeypadButton::digit(3),
                KeypadButton::operator(Operation::Multiply),
            ],
            vec![
                KeypadButton::digit(4),
                KeypadButton::digit(5),
                KeypadButton::digit(6),
                KeypadButton::operator(Operation::Add),
            ],
            vec![
                KeypadButton::digit(7),
                KeypadButton::digit(8),
                KeypadButton::digit(9),
                KeypadButton::operator(Operation::Subtract),
            ],
            vec![
                KeypadButton::point(),
                KeypadButton::digit(0),
                KeypadButton::equals().spanning(2),
            ],
        ])
    }

    /// Lays out rows of buttons left to right, assigning grid positions
    fn from_rows(rows: Vec<Vec<KeypadButton>>) -> Self {
        let row_count = rows.len();
        let mut cols = 0;
        let mut buttons = Vec::new();

        for (row, row_buttons) in rows.into_iter().enumerate() {
            let mut col = 0;
            for mut btn in row_buttons {
                btn.row = row;
                btn.col = col;
                col += btn.span;
                buttons.push(btn);
            }
            cols = cols.max(col);
        }

        Self {
            buttons,
            cols,
            rows: row_count,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Returns the index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by label; `/` is accepted for `÷` and labels are
    /// case-insensitive
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        let label = match label.trim() {
            "/" => "÷",
            other => other,
        };
        self.buttons
            .iter()
            .position(|b| b.label.eq_ignore_ascii_case(label))
    }

    /// Finds the button that issues an event
    #[must_use]
    pub fn find_button_by_event(&self, event: Event) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns the button next to `index` in a direction, if any
    ///
    /// Left/right step over spans; up/down keep the leftmost column of the
    /// current button.
    #[must_use]
    pub fn neighbor(&self, index: usize, direction: FocusDirection) -> Option<usize> {
        let btn = self.buttons.get(index)?;
        match direction {
            FocusDirection::Left => btn
                .col
                .checked_sub(1)
                .and_then(|col| self.index_at(btn.row, col)),
            FocusDirection::Right => self.index_at(btn.row, btn.col + btn.span),
            FocusDirection::Up => btn
                .row
                .checked_sub(1)
                .and_then(|row| self.index_at(row, btn.col)),
            FocusDirection::Down => self.index_at(btn.row + 1, btn.col),
        }
    }

    /// Converts a click position inside the rendered keypad to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0
            || rel_y == 0
            || rel_x >= area.width.saturating_sub(1)
            || rel_y >= area.height.saturating_sub(1)
        {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = usize::from((rel_x - 1) / btn_width);
        let row = usize::from((rel_y - 1) / btn_height);
        self.index_at(row, col)
    }

    /// Size of one grid cell inside the bordered area
    fn cell_size(&self, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        (
            inner_width / self.cols.max(1) as u16,
            inner_height / self.rows.max(1) as u16,
        )
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    focus: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            focus: None,
        }
    }

    /// Marks a button as focused
    #[must_use]
    pub fn focused(mut self, index: usize) -> Self {
        self.focus = Some(index);
        self
    }

    fn button_style(&self, index: usize, btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }

        let base = match btn.event {
            Event::AddDigit(_) => Style::default().fg(Color::White),
            Event::ChooseOperation(_) => Style::default().fg(Color::Yellow),
            Event::Evaluate => Style::default().fg(Color::Green),
            Event::Clear => Style::default().fg(Color::Red),
            Event::DeleteDigit => Style::default().fg(Color::Cyan),
        };

        if self.focus == Some(index) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (btn_width, btn_height) = self.keypad.cell_size(area);
        if btn_width < 3 || btn_height == 0 {
            return; // Too small to render
        }

        for (index, btn) in self.keypad.buttons().enumerate() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height;
            let width = btn.span as u16 * btn_width;

            let span = Span::styled(format!("[{}]", btn.label), self.button_style(index, btn));
            let label_width = span.width() as u16;
            let label_x = x + width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.bottom() && label_x < inner.right() {
                buf.set_span(label_x, label_y, &span, width);
            }
        }
    }
}
