//! Input field handling for the terminal user interface.

/// A single-line text input with cursor position management.
///
/// Used for the decorative sidebar search box and the detail panel's notes
/// editor. Neither writes back into the store.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create an empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field seeded with text, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    /// Insert a character at the cursor.
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

    /// Delete the character at the cursor.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_offset();
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
