use unicode_width::UnicodeWidthStr;

/// Handle to the root view's text input.
///
/// Only user key entry edits it; everything else reads it through
/// [`InputHandle::value`].
#[derive(Debug, Default)]
pub struct InputHandle {
    text: String,
    cursor: usize,
}

impl InputHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Display column of the cursor, accounting for wide characters.
    pub(crate) fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub(crate) fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(crate) fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub(crate) fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub(crate) fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub(crate) fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub(crate) fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputHandle {
        let mut input = InputHandle::new();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_starts_empty() {
        assert_eq!(InputHandle::new().value(), "");
    }

    #[test]
    fn test_edit_in_middle() {
        let mut input = typed("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.value(), "abc");

        input.move_home();
        input.delete_forward();
        assert_eq!(input.value(), "bc");

        input.move_end();
        input.delete_back();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = typed("héllo");
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.value(), "éllo");
        input.move_right();
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_cursor_column_wide_chars() {
        let input = typed("日本");
        assert_eq!(input.cursor_column(), 4);
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = typed("hello big world  ");
        input.delete_word_back();
        assert_eq!(input.value(), "hello big ");
        input.delete_word_back();
        assert_eq!(input.value(), "hello ");
    }
}
