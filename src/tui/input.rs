//! Input field handling for the terminal user interface.

/// A text input field with cursor position and active state management.
///
/// The cursor is a character index, not a byte offset, so multi-byte input
/// ("café") keeps insert and remove on character boundaries.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        InputField::default()
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Reset the field to empty with the cursor at the start.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Byte offset of the cursor's character position.
    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    /// Move cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut field = InputField::new();
        for c in "Homwork".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "Homwork");

        // Fix the typo: move back before 'w' and insert 'e'.
        field.move_cursor_left();
        field.move_cursor_left();
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_char('e');
        assert_eq!(field.value, "Homework");

        field.handle_delete();
        assert_eq!(field.value, "Homeork");
        field.handle_backspace();
        assert_eq!(field.value, "Homork");
    }

    #[test]
    fn test_typing_after_multibyte_char() {
        let mut field = InputField::new();
        field.handle_char('é');
        field.handle_char('a');
        assert_eq!(field.value, "éa");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = InputField::new();
        for c in "café".chars() {
            field.handle_char(c);
        }
        field.handle_char('s');
        assert_eq!(field.value, "cafés");

        field.handle_backspace();
        field.handle_backspace();
        assert_eq!(field.value, "caf");

        field.move_cursor_left();
        field.handle_char('é');
        assert_eq!(field.value, "caéf");
        field.handle_delete();
        assert_eq!(field.value, "caé");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut field = InputField::new();
        field.move_cursor_left();
        field.handle_backspace();
        assert_eq!(field.cursor, 0);

        field.handle_char('a');
        field.move_cursor_right();
        assert_eq!(field.cursor, 1);
        field.handle_delete();
        assert_eq!(field.value, "a");
    }

    #[test]
    fn test_clear_resets_value_and_cursor() {
        let mut field = InputField::new();
        for c in "12/10/2022".chars() {
            field.handle_char(c);
        }
        assert!(!field.is_empty());
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor, 0);
    }
}
