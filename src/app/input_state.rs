use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Query input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create a new InputState
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Query ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Delete all text in the input field
    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_state() {
        let state = InputState::new();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_query_after_insert() {
        let mut state = InputState::new();
        state.textarea.insert_str("what is the weather");
        assert_eq!(state.query(), "what is the weather");
    }

    #[test]
    fn test_clear_empties_the_field() {
        let mut state = InputState::new();
        state.textarea.insert_str("some query");
        state.clear();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_clear_on_empty_field_is_harmless() {
        let mut state = InputState::new();
        state.clear();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_clear_with_cursor_mid_line() {
        let mut state = InputState::new();
        state.textarea.insert_str("hello world");
        for _ in 0..5 {
            state.textarea.move_cursor(CursorMove::Back);
        }

        state.clear();

        assert_eq!(state.query(), "");
    }
}
