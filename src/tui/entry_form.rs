//! Draft entry form for new tasks.
//!
//! Two text fields (task name, due date) plus field navigation. The form
//! holds the uncommitted draft values; committing them to the list is the
//! app's job, and [`EntryForm::clear`] resets the draft after an accepted
//! submission.

use crate::tui::input::InputField;

/// Field order constants for the entry form.
pub const NAME_FIELD: usize = 0;
pub const DUE_FIELD: usize = 1;

const FIELD_COUNT: usize = 2;

/// Block title of the task-name input.
pub const NAME_LABEL: &str = "Add New Item";
/// Placeholder text shown while the due-date input is empty.
pub const DUE_PLACEHOLDER: &str = "mm/dd/yyyy";

/// Draft input state for a new-task submission.
pub struct EntryForm {
    pub name: InputField,
    pub due: InputField,
    pub current_field: usize,
}

impl EntryForm {
    /// Create an empty form with the name field active.
    pub fn new() -> Self {
        let mut form = EntryForm {
            name: InputField::new(),
            due: InputField::new(),
            current_field: NAME_FIELD,
        };
        form.update_active_field();
        form
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    pub fn update_active_field(&mut self) {
        self.name.active = self.current_field == NAME_FIELD;
        self.due.active = self.current_field == DUE_FIELD;
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            NAME_FIELD => self.name.handle_char(c),
            DUE_FIELD => self.due.handle_char(c),
            _ => {}
        }
    }

    /// Handle backspace input for the currently active field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            NAME_FIELD => self.name.handle_backspace(),
            DUE_FIELD => self.due.handle_backspace(),
            _ => {}
        }
    }

    /// Handle delete input for the currently active field.
    pub fn handle_delete(&mut self) {
        match self.current_field {
            NAME_FIELD => self.name.handle_delete(),
            DUE_FIELD => self.due.handle_delete(),
            _ => {}
        }
    }

    /// Handle left/right arrow keys for cursor movement.
    pub fn handle_left_right(&mut self, right: bool) {
        let field = match self.current_field {
            NAME_FIELD => &mut self.name,
            DUE_FIELD => &mut self.due,
            _ => return,
        };
        if right {
            field.move_cursor_right();
        } else {
            field.move_cursor_left();
        }
    }

    /// Reset the draft after an accepted submission, back on the name field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.due.clear();
        self.current_field = NAME_FIELD;
        self.update_active_field();
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        EntryForm::new()
    }
}
