//! TUI rendering
//!
//! Layout, top to bottom inside the outer frame: the two-line display, the
//! keypad, and a one-line hint bar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title of the outer frame
pub const TITLE: &str = " Grid Calculator ";

/// Hint bar contents
pub const HINTS: &str = "click · ←↑↓→ move · Enter press · q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns where the keypad is drawn for a given frame area
///
/// The event loop uses this to hit-test mouse clicks against the same
/// geometry the renderer used.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    UiLayout::split(area).keypad
}

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Two-line display block
    pub display: Rect,
    /// Keypad block
    pub keypad: Rect,
    /// Hint bar
    pub hints: Rect,
}

impl UiLayout {
    /// Splits the frame area into regions
    #[must_use]
    pub fn split(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Display
                Constraint::Min(7),    // Keypad
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self {
            display: chunks[0],
            keypad: chunks[1],
            hints: chunks[2],
        }
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the previous and current lines, right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();

        let lines = vec![
            Line::from(Span::styled(
                display.previous_line,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                display.current_line,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad())
            .focused(self.app.focus())
            .render(area, buf);
    }

    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HINTS, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = UiLayout::split(area);
        self.render_display(layout.display, buf);
        self.render_keypad(layout.keypad, buf);
        self.render_hints(layout.hints, buf);
    }
}
