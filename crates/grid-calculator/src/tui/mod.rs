//! Terminal front end
//!
//! A blocking event loop: read one terminal event, map it to a UI action,
//! apply it, redraw.

mod app;
mod input;
pub mod keypad;
pub mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, UiAction};
pub use keypad::{FocusDirection, Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, UiLayout, HINTS, TITLE};

use crossterm::event;
use ratatui::layout::Rect;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Runs the interactive calculator until the user quits
pub fn run(config: &AppConfig) -> AppResult<()> {
    terminal::install_panic_hook();
    let mut tui = terminal::setup_terminal(config.mouse)?;
    info!(mouse = config.mouse, "calculator started");

    let result = run_loop(&mut tui);
    let restored = terminal::restore_terminal(&mut tui, config.mouse);
    info!("calculator stopped");
    finish(result, restored)
}

/// Combines the loop and restore outcomes; a loop error wins
fn finish(result: AppResult<()>, restored: AppResult<()>) -> AppResult<()> {
    result.and(restored)
}

fn run_loop(tui: &mut terminal::Tui) -> AppResult<()> {
    let mut app = CalculatorApp::new();
    let input = InputHandler::new();
    let mut keypad_rect = Rect::default();

    while !app.should_quit() {
        tui.draw(|frame| {
            keypad_rect = keypad_area(frame.area());
            render(&app, frame);
        })?;

        let action = input.handle_event(&event::read()?);
        app.handle(action, keypad_rect);
    }

    Ok(())
}
