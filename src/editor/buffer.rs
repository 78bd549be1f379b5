use ropey::Rope;

/// Cursor position in the editor buffer.
///
/// Columns are character offsets within the line, not bytes, so multibyte
/// text navigates one glyph at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            col_memory: 0,
        }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    /// Update column and reset column memory to match.
    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text buffer backed by a rope data structure.
///
/// The single source of truth for document content: the preview is derived
/// from `text()` and saving writes `text()` to disk. The cursor tracks the
/// current editing position; `dirty` tracks unsaved modifications.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx);
        let s = line.to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// Length of a line in characters (without trailing newline).
    pub fn line_char_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole buffer (e.g., external reload), keeping the cursor
    /// on the same line where possible. The buffer becomes clean.
    pub fn replace_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        let line = self.cursor.line.min(self.line_count().saturating_sub(1));
        let col = self.cursor.col.min(self.line_char_len(line));
        self.cursor = Cursor::at(line, col);
        self.dirty = false;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, ch);
        self.cursor.set_col(self.cursor.col + 1);
        self.dirty = true;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let char_idx = self.cursor_char_idx();
        self.rope.insert(char_idx, s);

        // Move cursor to the end of the inserted text.
        let newlines = s.matches('\n').count();
        if newlines > 0 {
            self.cursor.line += newlines;
            let tail = s.rsplit('\n').next().unwrap_or("");
            self.cursor.set_col(tail.chars().count());
        } else {
            self.cursor.set_col(self.cursor.col + s.chars().count());
        }
        self.dirty = true;
    }

    /// Split the current line at the cursor (Enter key).
    pub fn split_line(&mut self) {
        let char_idx = self.cursor_char_idx();
        self.rope.insert_char(char_idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        self.dirty = true;
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor.col == 0 && self.cursor.line == 0 {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        if self.cursor.col == 0 {
            // Join with previous line: the char before the cursor is the newline.
            let prev_line_len = self.line_char_len(self.cursor.line - 1);
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_line_len);
        } else {
            self.rope.remove(char_idx - 1..char_idx);
            self.cursor.set_col(self.cursor.col - 1);
        }
        self.dirty = true;
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        let line_len = self.line_char_len(self.cursor.line);

        if self.cursor.col >= line_len && self.cursor.line + 1 >= self.line_count() {
            return false;
        }

        let char_idx = self.cursor_char_idx();
        self.rope.remove(char_idx..=char_idx);
        self.dirty = true;
        true
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move cursor to the beginning of the line (Home).
    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the line (End).
    pub fn move_end(&mut self) {
        let len = self.line_char_len(self.cursor.line);
        self.cursor.set_col(len);
    }

    /// Move cursor one word to the left (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        if self.cursor.col == 0 {
            if self.cursor.line > 0 {
                self.cursor.line -= 1;
                self.cursor.set_col(self.line_char_len(self.cursor.line));
            }
            return;
        }

        let chars: Vec<char> = self
            .line_at(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut pos = self.cursor.col.min(chars.len());

        // Skip whitespace/punctuation left of the cursor, then the word itself.
        while pos > 0 && !is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && is_word_char(chars[pos - 1]) {
            pos -= 1;
        }
        self.cursor.set_col(pos);
    }

    /// Move cursor one word to the right (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let line_len = self.line_char_len(self.cursor.line);

        if self.cursor.col >= line_len {
            if self.cursor.line + 1 < self.line_count() {
                self.cursor.line += 1;
                self.cursor.set_col(0);
            }
            return;
        }

        let chars: Vec<char> = self
            .line_at(self.cursor.line)
            .unwrap_or_default()
            .chars()
            .collect();
        let mut pos = self.cursor.col;

        // Skip the rest of the current word, then the gap to the next one.
        while pos < chars.len() && is_word_char(chars[pos]) {
            pos += 1;
        }
        while pos < chars.len() && !is_word_char(chars[pos]) {
            pos += 1;
        }
        self.cursor.set_col(pos);
    }

    /// Move cursor to a specific line and column, clamping both.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let max_line = self.line_count().saturating_sub(1);
        self.cursor.line = line.min(max_line);
        let max_col = self.line_char_len(self.cursor.line);
        self.cursor.set_col(col.min(max_col));
    }

    /// Move cursor to the start of the buffer (Ctrl+Home).
    pub const fn move_to_start(&mut self) {
        self.cursor.line = 0;
        self.cursor.set_col(0);
    }

    /// Move cursor to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        let last_line = self.line_count().saturating_sub(1);
        self.cursor.line = last_line;
        self.cursor.set_col(self.line_char_len(last_line));
    }

    // --- Private helpers ---

    /// Convert the cursor position to a rope char index.
    fn cursor_char_idx(&self) -> usize {
        let line_start = self.rope.line_to_char(self.cursor.line);
        line_start + self.cursor.col.min(self.line_char_len(self.cursor.line))
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.set_col(self.cursor.col - 1);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_char_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        let line_len = self.line_char_len(self.cursor.line);
        if self.cursor.col < line_len {
            self.cursor.set_col(self.cursor.col + 1);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            let max_col = self.line_char_len(self.cursor.line);
            self.cursor.col = self.cursor.col_memory.min(max_col);
        }
    }

    fn move_down(&mut self) {
        if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            let max_col = self.line_char_len(self.cursor.line);
            self.cursor.col = self.cursor.col_memory.min(max_col);
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_preserves_content() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some("world".to_string()));
    }

    #[test]
    fn test_from_text_trailing_newline() {
        let buf = EditorBuffer::from_text("hello\n");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(1), Some(String::new()));
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = EditorBuffer::from_text("hello");
        assert_eq!(buf.line_at(1), None);
    }

    #[test]
    fn test_line_char_len_counts_chars_not_bytes() {
        let buf = EditorBuffer::from_text("café\nhi");
        assert_eq!(buf.line_char_len(0), 4);
        assert_eq!(buf.line_char_len(1), 2);
    }

    #[test]
    fn test_text_roundtrip() {
        let content = "line one\nline two\nline three";
        let buf = EditorBuffer::from_text(content);
        assert_eq!(buf.text(), content);
    }

    // --- Dirty tracking ---

    #[test]
    fn test_new_buffer_is_clean() {
        let buf = EditorBuffer::from_text("hello");
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_insert_marks_dirty() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.insert_char('!');
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_mark_clean_resets_dirty() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.insert_char('!');
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }

    // --- replace_text ---

    #[test]
    fn test_replace_text_swaps_content_and_clears_dirty() {
        let mut buf = EditorBuffer::from_text("old");
        buf.insert_char('!');
        buf.replace_text("brand new\ncontent");
        assert_eq!(buf.text(), "brand new\ncontent");
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_replace_text_clamps_cursor() {
        let mut buf = EditorBuffer::from_text("one\ntwo\nthree");
        buf.move_to(2, 5);
        buf.replace_text("solo");
        assert_eq!(buf.cursor().line, 0);
        assert!(buf.cursor().col <= 4);
    }

    // --- Character insertion ---

    #[test]
    fn test_insert_char_at_start() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.insert_char('H');
        assert_eq!(buf.line_at(0), Some("Hhello".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(0, 1));
    }

    #[test]
    fn test_insert_char_at_end() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_end();
        buf.insert_char('!');
        assert_eq!(buf.line_at(0), Some("hello!".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(0, 6));
    }

    #[test]
    fn test_insert_multibyte_char_advances_one_column() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_end();
        buf.insert_char('é');
        assert_eq!(buf.line_at(0), Some("helloé".to_string()));
        assert_eq!(buf.cursor().col, 6);
    }

    // --- String insertion ---

    #[test]
    fn test_insert_str_single_line() {
        let mut buf = EditorBuffer::from_text("hd");
        buf.move_cursor(Direction::Right);
        buf.insert_str("ello worl");
        assert_eq!(buf.line_at(0), Some("hello world".to_string()));
    }

    #[test]
    fn test_insert_str_multi_line_moves_cursor_to_tail() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_cursor(Direction::Right);
        buf.insert_str("x\nyz");
        assert_eq!(buf.line_at(0), Some("ax".to_string()));
        assert_eq!(buf.line_at(1), Some("yzb".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(1, 2));
    }

    #[test]
    fn test_insert_str_empty_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.insert_str("");
        assert!(!buf.is_dirty());
        assert_eq!(buf.text(), "hello");
    }

    // --- Line splitting (Enter) ---

    #[test]
    fn test_split_line_at_end() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_end();
        buf.split_line();
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some(String::new()));
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_split_line_in_middle() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.move_to(0, 5);
        buf.split_line();
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some(" world".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    // --- Backspace deletion ---

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "hello");
    }

    #[test]
    fn test_delete_back_removes_char() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_to(0, 5);
        buf.delete_back();
        assert_eq!(buf.line_at(0), Some("hell".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(0, 4));
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(1, 0);
        buf.delete_back();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some("helloworld".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_delete_back_multibyte() {
        let mut buf = EditorBuffer::from_text("café");
        buf.move_end();
        buf.delete_back();
        assert_eq!(buf.line_at(0), Some("caf".to_string()));
        assert_eq!(buf.cursor().col, 3);
    }

    // --- Forward deletion (Delete key) ---

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_end();
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_forward_removes_char() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.delete_forward();
        assert_eq!(buf.line_at(0), Some("ello".to_string()));
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_delete_forward_joins_lines() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(0, 5);
        buf.delete_forward();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some("helloworld".to_string()));
    }

    // --- Cursor movement: left/right ---

    #[test]
    fn test_move_left_at_start_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_left_wraps_to_prev_line() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(0, 5);
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_move_right_at_buffer_end_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_end();
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_move_over_multibyte_steps_one_column() {
        let mut buf = EditorBuffer::from_text("café");
        buf.move_end();
        assert_eq!(buf.cursor().col, 4);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor().col, 3);
    }

    // --- Cursor movement: up/down ---

    #[test]
    fn test_move_up_at_first_line_is_noop() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_cursor(Direction::Up);
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    #[test]
    fn test_move_down_preserves_column() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(0, 3);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor(), Cursor::at(1, 3));
    }

    #[test]
    fn test_column_memory_across_short_line() {
        let mut buf = EditorBuffer::from_text("hello\nhi\nworld");
        buf.move_to(0, 4);
        buf.move_cursor(Direction::Down); // "hi" clamps to col 2
        assert_eq!(buf.cursor().line, 1);
        assert_eq!(buf.cursor().col, 2);
        buf.move_cursor(Direction::Down); // "world" restores col 4 from memory
        assert_eq!(buf.cursor().line, 2);
        assert_eq!(buf.cursor().col, 4);
    }

    // --- Home / End ---

    #[test]
    fn test_move_home_and_end() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_end();
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
        buf.move_home();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    // --- Word movement ---

    #[test]
    fn test_move_word_left_from_middle_of_word() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.move_to(0, 8); // inside "world"
        buf.move_word_left();
        assert_eq!(buf.cursor().col, 6);
    }

    #[test]
    fn test_move_word_left_from_start_of_word() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.move_to(0, 6);
        buf.move_word_left();
        assert_eq!(buf.cursor().col, 0);
    }

    #[test]
    fn test_move_word_left_at_line_start_wraps() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(1, 0);
        buf.move_word_left();
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_move_word_right_from_start() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.move_word_right();
        assert_eq!(buf.cursor().col, 6);
    }

    #[test]
    fn test_move_word_right_at_line_end_wraps() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(0, 5);
        buf.move_word_right();
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    // --- move_to and buffer extremes ---

    #[test]
    fn test_move_to_clamps_line_and_col() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_to(100, 100);
        assert_eq!(buf.cursor().line, 0);
        assert_eq!(buf.cursor().col, 5);
    }

    #[test]
    fn test_move_to_start_and_end_of_buffer() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to_end();
        assert_eq!(buf.cursor(), Cursor::at(1, 5));
        buf.move_to_start();
        assert_eq!(buf.cursor(), Cursor::at(0, 0));
    }

    // --- Complex editing sequences ---

    #[test]
    fn test_type_then_backspace_then_type() {
        let mut buf = EditorBuffer::from_text("");
        buf.insert_char('h');
        buf.insert_char('e');
        buf.insert_char('l');
        buf.delete_back();
        buf.insert_char('l');
        buf.insert_char('p');
        assert_eq!(buf.line_at(0), Some("help".to_string()));
    }

    #[test]
    fn test_split_and_rejoin() {
        let mut buf = EditorBuffer::from_text("helloworld");
        buf.move_to(0, 5);
        buf.split_line();
        assert_eq!(buf.line_count(), 2);

        buf.delete_back();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some("helloworld".to_string()));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn insert_then_text_contains_char(
                text in "[a-z \n]{0,40}",
                ch in proptest::char::range('a', 'z'),
            ) {
                let mut buf = EditorBuffer::from_text(&text);
                buf.insert_char(ch);
                prop_assert!(buf.text().contains(ch));
            }

            #[test]
            fn cursor_always_within_bounds(
                text in "[a-zé \n]{0,60}",
                line in 0usize..20,
                col in 0usize..40,
            ) {
                let mut buf = EditorBuffer::from_text(&text);
                buf.move_to(line, col);
                let c = buf.cursor();
                prop_assert!(c.line < buf.line_count());
                prop_assert!(c.col <= buf.line_char_len(c.line));
            }

            #[test]
            fn delete_back_never_panics_anywhere(
                text in "[a-zé\n]{0,60}",
                line in 0usize..20,
                col in 0usize..40,
            ) {
                let mut buf = EditorBuffer::from_text(&text);
                buf.move_to(line, col);
                let _ = buf.delete_back();
                let c = buf.cursor();
                prop_assert!(c.line < buf.line_count());
                prop_assert!(c.col <= buf.line_char_len(c.line));
            }
        }
    }
}
