//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task list and the
//! draft entry form, handles keyboard input, and renders the interface.
//! Invalid and duplicate submissions are dropped without feedback; the list
//! is simply left unchanged.

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};

use crate::list::{Submission, TaskList};
use crate::task::Task;
use crate::tui::colors::{row_background, ACTIVE_GOLD};
use crate::tui::entry_form::{EntryForm, DUE_PLACEHOLDER, NAME_LABEL};
use crate::tui::input::InputField;

/// Application state for the terminal user interface.
///
/// Holds the task list, the draft entry form and the optional pinned
/// evaluation date used for overdue highlighting. There is one writer (key
/// handling) and one reader (rendering), both on the event-loop thread.
pub struct App {
    list: TaskList,
    form: EntryForm,
    status_message: String,
    pinned_today: Option<NaiveDate>,
}

impl App {
    /// Create a new App with an empty task list.
    ///
    /// When `pinned_today` is set, it is the evaluation date for the late
    /// classification; otherwise the local calendar date is taken fresh on
    /// every render, so classification is never frozen at creation time.
    pub fn new(pinned_today: Option<NaiveDate>) -> Self {
        App {
            list: TaskList::new(),
            form: EntryForm::new(),
            status_message: String::new(),
            pinned_today,
        }
    }

    /// The date tasks are classified against.
    fn evaluation_date(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Drive the draw/input loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;
            if self.handle_input()? {
                return Ok(());
            }
        }
    }

    /// Poll for and dispatch one keyboard event.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                return Ok(self.handle_key(key.code, key.modifiers));
            }
        }
        Ok(false)
    }

    /// Handle a single key press.
    ///
    /// Returns true if the application should quit.
    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        match key {
            KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.handle_left_right(false),
            KeyCode::Right => self.form.handle_left_right(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Delete => self.form.handle_delete(),
            KeyCode::Enter => self.submit_form(),
            // Plain text input only; Ctrl/Alt chords are not characters.
            KeyCode::Char(c)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.handle_char(c)
            }
            _ => {}
        }
        false
    }

    /// Submit the current draft to the task list.
    ///
    /// On acceptance the draft inputs are cleared and a confirmation is shown
    /// in the status line. Rejected submissions leave both the list and the
    /// draft as they were.
    fn submit_form(&mut self) {
        let name = self.form.name.value.trim().to_string();
        match self.list.submit(&self.form.name.value, &self.form.due.value) {
            Submission::Added => {
                self.form.clear();
                self.status_message = format!("Added \"{}\"", name);
            }
            Submission::EmptyName | Submission::InvalidDate | Submission::Duplicate => {}
        }
    }

    /// Render the full interface.
    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // task name input
                Constraint::Length(3), // due date input
                Constraint::Length(1), // add control
                Constraint::Min(0),    // task list
                Constraint::Length(1), // status line
            ])
            .split(f.area());

        let header = Paragraph::new(Span::styled(
            "TO-DO LIST",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        self.render_field(f, chunks[1], &self.form.name, NAME_LABEL, None);
        self.render_field(f, chunks[2], &self.form.due, "Due Date", Some(DUE_PLACEHOLDER));

        let add = Paragraph::new("[ Add ]  (Enter submits, Tab switches fields, Esc quits)")
            .alignment(Alignment::Center);
        f.render_widget(add, chunks[3]);

        self.render_tasks(f, chunks[4]);

        let status = Paragraph::new(self.status_message.as_str())
            .style(Style::default().fg(Color::Cyan));
        f.render_widget(status, chunks[5]);
    }

    /// Render one entry-form field, with an optional placeholder shown dim
    /// while the field is empty.
    fn render_field(
        &self,
        f: &mut Frame,
        area: Rect,
        field: &InputField,
        title: &str,
        placeholder: Option<&str>,
    ) {
        let border_style = if field.active {
            Style::default().fg(ACTIVE_GOLD)
        } else {
            Style::default()
        };
        let content = if field.is_empty() {
            Span::styled(
                placeholder.unwrap_or(""),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::raw(field.value.as_str())
        };
        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
        f.render_widget(input, area);
        if field.active {
            // Terminal cursor inside the bordered block, at the edit position.
            f.set_cursor_position((area.x + field.cursor as u16 + 1, area.y + 1));
        }
    }

    /// Render the task list, one row per task with its classification color.
    fn render_tasks(&self, f: &mut Frame, area: Rect) {
        let today = self.evaluation_date();
        let items: Vec<ListItem> = self
            .list
            .tasks()
            .iter()
            .map(|task| {
                let (text, style) = task_row(task, today);
                ListItem::new(text).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Tasks ({})", self.list.len())),
        );
        f.render_widget(list, area);
    }
}

/// Build the display text and row style for a task.
///
/// The row text is the task name followed by the due date when one is set.
/// The background reflects the late classification against `today`.
fn task_row(task: &Task, today: NaiveDate) -> (String, Style) {
    let text = if task.due.is_some() {
        format!("{}  {}", task.name, task.due_label())
    } else {
        task.name.clone()
    };
    let style = Style::default()
        .bg(row_background(task.is_late(today)))
        .fg(Color::Black);
    (text, style)
}
