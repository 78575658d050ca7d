//! Terminal setup and teardown
//!
//! The terminal is restored on normal exit and from the panic hook.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::AppResult;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enables raw mode, enters the alternate screen and optionally captures
/// the mouse
///
/// If any step after raw mode fails, the terminal is put back before the
/// error is returned.
pub fn setup_terminal(mouse: bool) -> AppResult<Tui> {
    enable_raw_mode()?;

    rollback_on_error(
        || enter_screen(mouse),
        || {
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Runs `step`, calling `rollback` before returning its error
fn rollback_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> AppResult<T> {
    step().map_err(|err| {
        rollback();
        err.into()
    })
}

fn enter_screen(mouse: bool) -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leaves the alternate screen, disables raw mode and shows the cursor
pub fn restore_terminal(terminal: &mut Tui, mouse: bool) -> AppResult<()> {
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;
    Ok(())
}

/// Chains a panic hook that puts the terminal back before reporting
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
