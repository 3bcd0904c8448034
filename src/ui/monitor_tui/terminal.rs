use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{DashError, Result};

use super::render::{render_ui, DashboardView};

/// Destination for composed frames
pub trait FrameSink {
    fn render(&mut self, view: &DashboardView) -> Result<()>;
}

/// Raw mode + alternate screen, held for the lifetime of the value.
///
/// The terminal is restored by [`TerminalSession::restore`], on drop, and by
/// a panic hook while the session is alive.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    /// Take over the terminal; failing here is fatal for the dashboard
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().map_err(|e| DashError::terminal(format!("failed to enable raw mode: {}", e)))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(DashError::terminal(format!(
                "failed to enter alternate screen: {}",
                e
            )));
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(DashError::terminal(format!("failed to create terminal: {}", e)));
            }
        };

        // panic = "abort" in release skips Drop, so restore from the hook too
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Give the terminal back to the shell; later calls are no-ops
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl FrameSink for TerminalSession {
    fn render(&mut self, view: &DashboardView) -> Result<()> {
        self.terminal
            .draw(|frame| render_ui(frame, view))
            .map_err(|e| DashError::terminal(format!("failed to draw frame: {}", e)))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            eprintln!("Failed to restore terminal: {}", e);
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
