//! Input Modes
//!
//! Modal editing state for the list screen and its search line.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Typing into the registration form
    Insert,
    /// Live search (/)
    Search,
    /// Confirmation dialog
    Confirm,
    /// Alert popup
    Alert,
}

impl InputMode {
    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Search => "SEARCH",
            Self::Confirm => "CONFIRM",
            Self::Alert => "ALERT",
        }
    }
}

/// Byte offset of the `char_idx`-th character of `s`
pub fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

/// Mode state with associated data
#[derive(Debug, Clone)]
pub struct ModeState {
    /// Current mode
    pub mode: InputMode,
    /// Text buffer for input modes
    pub buffer: String,
    /// Cursor position in buffer, in characters
    pub cursor: usize,
    /// Pending key sequence (for multi-key commands like gg, dd)
    pub pending: Option<char>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
            cursor: 0,
            pending: None,
        }
    }
}

impl ModeState {
    /// Create new mode state
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new mode
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.buffer.clear();
        self.cursor = 0;
        self.pending = None;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(InputMode::Normal);
    }

    pub fn to_insert(&mut self) {
        self.set_mode(InputMode::Insert);
    }

    /// Enter search mode with `query` already in the buffer
    pub fn to_search(&mut self, query: &str) {
        self.set_mode(InputMode::Search);
        self.set_buffer(query);
    }

    pub fn to_confirm(&mut self) {
        self.set_mode(InputMode::Confirm);
    }

    /// Show an alert without losing the underlying buffer
    pub fn to_alert(&mut self) {
        self.mode = InputMode::Alert;
        self.pending = None;
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let at = byte_index(&self.buffer, self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = byte_index(&self.buffer, self.cursor);
            self.buffer.remove(at);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = byte_index(&self.buffer, self.cursor);
            self.buffer.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear buffer
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Get buffer contents
    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }

    /// Set buffer contents
    pub fn set_buffer(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.cursor = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }
}
