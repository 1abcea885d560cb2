//! Task data structure and due-date classification.
//!
//! This module defines the `Task` struct representing a single to-do entry
//! and the late/on-time classification used for rendering.

use chrono::NaiveDate;

/// A to-do entry with a name and an optional due date.
///
/// Tasks are created only through [`crate::list::TaskList::submit`] and are
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub due: Option<NaiveDate>,
}

impl Task {
    /// Whether this task is overdue relative to `today`.
    ///
    /// A task is late only when its due date is strictly before `today`;
    /// a task due exactly today, or one with no due date, is on time.
    /// Evaluated at render time, not frozen at creation.
    pub fn is_late(&self, today: NaiveDate) -> bool {
        match self.due {
            Some(due) => due < today,
            None => false,
        }
    }

    /// The `mm/dd/yyyy` display text for the due date, empty when absent.
    pub fn due_label(&self) -> String {
        match self.due {
            Some(due) => due.format("%m/%d/%Y").to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_past_due_date_is_late() {
        let task = Task {
            name: "History Test Late".into(),
            due: Some(date(2020, 12, 12)),
        };
        assert!(task.is_late(date(2022, 6, 1)));
    }

    #[test]
    fn test_future_due_date_is_on_time() {
        let task = Task {
            name: "History Test".into(),
            due: Some(date(2023, 12, 30)),
        };
        assert!(!task.is_late(date(2022, 6, 1)));
    }

    #[test]
    fn test_due_today_is_on_time() {
        let today = date(2022, 6, 1);
        let task = Task {
            name: "Homework".into(),
            due: Some(today),
        };
        assert!(!task.is_late(today));
    }

    #[test]
    fn test_no_due_date_is_on_time() {
        let task = Task {
            name: "Groceries".into(),
            due: None,
        };
        assert!(!task.is_late(date(2022, 6, 1)));
    }

    #[test]
    fn test_due_label_formats_mdy() {
        let task = Task {
            name: "Homework".into(),
            due: Some(date(2022, 12, 10)),
        };
        assert_eq!(task.due_label(), "12/10/2022");

        let undated = Task {
            name: "Homework".into(),
            due: None,
        };
        assert_eq!(undated.due_label(), "");
    }
}
