//! # Todo - Terminal To-Do List
//!
//! A small terminal to-do list with due-date tracking and overdue
//! highlighting.
//!
//! ## Key Features
//!
//! - **Quick Capture**: type a task name, optionally a due date
//!   (`mm/dd/yyyy`), press Enter
//! - **Overdue Highlighting**: tasks whose due date has passed are rendered
//!   on a red background, everything else on white
//! - **Duplicate Rejection**: re-submitting the same name and due date is a
//!   no-op, so the list never holds the same entry twice
//! - **Session-Local**: the list lives in memory for the session; nothing is
//!   written to disk
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interface
//! todo
//!
//! # Pin the evaluation date used for overdue highlighting
//! todo --today 12/10/2022
//! ```
//!
//! In the interface: type into "Add New Item", Tab to the due-date field,
//! Enter to add, Esc to quit.

use clap::Parser;

pub mod cli;
pub mod list;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod entry_form;
    pub mod input;
    pub mod run;
}

use cli::Cli;
use list::parse_due_date;

fn main() {
    let cli = Cli::parse();

    // "Today" for the late classification: local calendar date unless pinned.
    let pinned_today = match cli.today {
        Some(raw) => match parse_due_date(&raw) {
            Some(date) => Some(date),
            None => {
                eprintln!("Invalid --today value '{}': expected mm/dd/yyyy", raw);
                std::process::exit(1);
            }
        },
        None => None,
    };

    if let Err(e) = tui::run::run_tui(pinned_today) {
        eprintln!("Terminal error: {}", e);
        std::process::exit(1);
    }
}
