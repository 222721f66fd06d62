//! Owned terminal session: raw mode and the alternate screen for as long as
//! the session lives.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::{OrderDeskError, Result};

/// Ratatui terminal drawing to stdout.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// The dashboard's hold on the terminal.
///
/// Dropping the session puts the terminal back the way it was, so an early
/// return or a panic unwinding through `main` does not leave the shell in
/// raw mode.
pub struct TerminalSession {
    terminal: Tui,
    active: bool,
}

impl TerminalSession {
    /// Switches stdout into raw mode on the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDeskError::Io`] if stdout is not a TTY or the terminal
    /// refuses a mode switch. Any step already taken is undone.
    pub fn enter() -> Result<Self> {
        if !io::stdout().is_terminal() {
            return Err(OrderDeskError::Io(
                "the dashboard needs an interactive terminal (TTY)".to_string(),
            ));
        }

        enable_raw_mode().map_err(|e| io_error("enable raw mode", e))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(io_error("enter alternate screen", e));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(io_error("create terminal", e))
            }
        }
    }

    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDeskError::Io`] if the frame cannot be flushed.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal
            .draw(render)
            .map(|_| ())
            .map_err(|e| io_error("draw", e))
    }

    /// Leaves the alternate screen and restores cooked mode.
    ///
    /// Every step is attempted even if an earlier one fails; the first
    /// failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDeskError::Io`] if any restoration step fails.
    pub fn restore(mut self) -> Result<()> {
        self.leave()
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let raw = disable_raw_mode().map_err(|e| io_error("disable raw mode", e));
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| io_error("leave alternate screen", e));
        let cursor = self
            .terminal
            .show_cursor()
            .map_err(|e| io_error("show cursor", e));

        raw.and(screen).and(cursor)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            warn!("terminal not fully restored: {e}");
        }
    }
}

fn io_error(step: &str, e: io::Error) -> OrderDeskError {
    OrderDeskError::Io(format!("failed to {step}: {e}"))
}
