//! TUI entry point and terminal setup.

use std::io;

use chrono::NaiveDate;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::tui::app::App;

/// Initialise the terminal and run the task-list interface.
///
/// `pinned_today` fixes the evaluation date used for overdue highlighting;
/// `None` classifies against the local calendar date at render time. The
/// terminal is restored before returning, even when the app loop errors.
pub fn run_tui(pinned_today: Option<NaiveDate>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(pinned_today);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
