use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::{App, Focus};
use crate::results;

/// Timeout for event polling - allows periodic UI refresh while a
/// request is in flight and for notification expiration
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Handle paste events (bracketed paste mode)
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle paste events from bracketed paste mode
    ///
    /// The query input is single-line, so line breaks are flattened out.
    fn handle_paste_event(&mut self, text: String) {
        if self.focus != Focus::InputField {
            return;
        }

        let flat: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.input.textarea.insert_str(&flat);
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_key(key) {
            return;
        }

        // Not a global key, delegate to the focused pane
        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::ResultsPane => results::results_events::handle_results_pane_key(self, key),
        }
    }

    /// Keys that work regardless of focus
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Ctrl+C: quit
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            // Ctrl+L: clear query and result
            KeyCode::Char('l') if ctrl => {
                self.reset();
                true
            }
            // Ctrl+Y: copy the response document
            KeyCode::Char('y') if ctrl => {
                self.copy_payload();
                true
            }
            // Tab: switch focus between input and results
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::InputField => Focus::ResultsPane,
                    Focus::ResultsPane => Focus::InputField,
                };
                true
            }
            _ => false,
        }
    }

    /// Handle keys when the input field is focused
    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_query(),
            KeyCode::Esc => self.should_quit = true,
            _ => {
                self.input.textarea.input(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::exchange::ExchangeResult;

    fn test_app() -> App {
        App::new("http://127.0.0.1:1/demo".to_string(), &Config::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_updates_the_query() {
        let mut app = test_app();

        type_text(&mut app, "hello");

        assert_eq!(app.query(), "hello");
    }

    #[test]
    fn test_enter_with_empty_input_does_not_submit() {
        let mut app = test_app();

        app.handle_key_event(press(KeyCode::Enter));

        assert_eq!(app.exchange.result, ExchangeResult::Idle);
    }

    #[test]
    fn test_enter_submits_typed_query() {
        let mut app = test_app();
        type_text(&mut app, "hello");

        app.handle_key_event(press(KeyCode::Enter));

        assert!(app.exchange.is_pending());
        assert_eq!(app.query(), "hello");
    }

    #[test]
    fn test_enter_while_pending_is_ignored() {
        let mut app = test_app();
        type_text(&mut app, "hello");
        app.handle_key_event(press(KeyCode::Enter));

        app.handle_key_event(press(KeyCode::Enter));

        assert!(app.exchange.is_pending());
    }

    #[test]
    fn test_enter_does_not_insert_a_newline() {
        let mut app = test_app();
        type_text(&mut app, "hello");

        app.handle_key_event(press(KeyCode::Enter));

        assert_eq!(app.input.textarea.lines().len(), 1);
    }

    #[test]
    fn test_ctrl_l_resets_query_and_result() {
        let mut app = test_app();
        type_text(&mut app, "hello");
        app.exchange.result = ExchangeResult::Failure("boom".to_string());

        app.handle_key_event(ctrl('l'));

        assert_eq!(app.query(), "");
        assert_eq!(app.exchange.result, ExchangeResult::Idle);
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut app = test_app();
        assert_eq!(app.focus, Focus::InputField);

        app.handle_key_event(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::ResultsPane);

        app.handle_key_event(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::InputField);
    }

    #[test]
    fn test_esc_quits_from_input_field() {
        let mut app = test_app();

        app.handle_key_event(press(KeyCode::Esc));

        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let mut app = test_app();
        app.focus = Focus::ResultsPane;

        app.handle_key_event(ctrl('c'));

        assert!(app.should_quit());
    }

    #[test]
    fn test_paste_flattens_line_breaks() {
        let mut app = test_app();

        app.handle_paste_event("multi\nline\r\npaste".to_string());

        assert_eq!(app.query(), "multilinepaste");
    }

    #[test]
    fn test_paste_into_results_pane_is_ignored() {
        let mut app = test_app();
        app.focus = Focus::ResultsPane;

        app.handle_paste_event("pasted".to_string());

        assert_eq!(app.query(), "");
    }
}
