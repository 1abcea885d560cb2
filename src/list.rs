//! Task list state management and submission handling.
//!
//! This module provides the `TaskList` container along with due-date parsing.
//! Submissions are validated, normalised and de-duplicated here, with no
//! dependency on the rendering layer so the whole flow is testable headless.

use chrono::NaiveDate;

use crate::task::Task;

/// Outcome of a submission attempt.
///
/// Rejections leave the list unchanged. The caller decides whether to surface
/// them; the TUI keeps them silent and only reacts to `Added`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The task was appended to the list.
    Added,
    /// The name was empty (or whitespace-only) after trimming.
    EmptyName,
    /// The due-date text was non-empty but not a valid `mm/dd/yyyy` date.
    InvalidDate,
    /// A task with the same name and due date already exists.
    Duplicate,
}

/// In-memory, append-only list of tasks for the current session.
///
/// Insertion order is preserved for rendering. Invariant: no two tasks share
/// an identical `(name, due)` pair.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty task list.
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    /// Validate a draft submission and append it on acceptance.
    ///
    /// The name is trimmed and must be non-empty. The due text is trimmed;
    /// empty means "no due date", anything else must parse as `mm/dd/yyyy`.
    /// A `(name, due)` pair already in the list is rejected as a duplicate,
    /// so re-submitting the same task is an idempotent no-op.
    pub fn submit(&mut self, name: &str, due: &str) -> Submission {
        let name = name.trim();
        if name.is_empty() {
            return Submission::EmptyName;
        }

        let due_text = due.trim();
        let due = if due_text.is_empty() {
            None
        } else {
            match parse_due_date(due_text) {
                Some(date) => Some(date),
                None => return Submission::InvalidDate,
            }
        };

        if self.tasks.iter().any(|t| t.name == name && t.due == due) {
            return Submission::Duplicate;
        }

        self.tasks.push(Task {
            name: name.to_string(),
            due,
        });
        Submission::Added
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the list.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks yet.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Parse due-date input in `mm/dd/yyyy` form.
///
/// Single-digit month and day are accepted ("1/5/2022"), so spellings that
/// name the same calendar date compare equal after parsing.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%m/%d/%Y").ok()
}
