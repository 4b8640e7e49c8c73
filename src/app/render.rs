use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::notification::notification_render;
use crate::results::results_render;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Split the terminal into three areas: results, input, and help
        let layout = Layout::vertical([
            Constraint::Min(3),    // Results pane takes most of the space
            Constraint::Length(3), // Input field is fixed 3 lines
            Constraint::Length(1), // Help line at bottom
        ])
        .split(frame.area());

        let results_area = layout[0];
        let input_area = layout[1];
        let help_area = layout[2];

        // Render results pane
        results_render::render_pane(self, frame, results_area);

        // Render input field
        self.render_input_field(frame, input_area);

        // Render help line
        self.render_help_line(frame, help_area);

        // Render notification overlay last so it floats above everything
        notification_render::render_notification(frame, &mut self.notification);
    }

    /// Render the input field (bottom)
    fn render_input_field(&mut self, frame: &mut Frame, area: ratatui::layout::Rect) {
        // Border color - cyan when focused, gray when unfocused
        let border_color = if self.focus == Focus::InputField {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let mut title_spans = vec![Span::raw(" Query ")];
        if self.exchange.is_pending() {
            title_spans.push(Span::styled(
                "(sending...) ",
                Style::default().fg(Color::Yellow),
            ));
        }

        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title_spans))
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input.textarea, area);
    }

    /// Render the help line (bottom)
    fn render_help_line(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let help_text =
            " Enter: Send | Tab: Switch Focus | Ctrl+L: Clear | Ctrl+Y: Copy Response | Esc: Quit";

        let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

        frame.render_widget(help, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::exchange::ExchangeResult;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn test_app() -> App {
        App::new("http://127.0.0.1:1/demo".to_string(), &Config::default())
    }

    /// Render the app once and return the buffer as a string
    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().to_string()
    }

    /// Settle the result slot directly and rebuild the display cache
    fn set_result(app: &mut App, result: ExchangeResult) {
        app.exchange.result = result;
        app.refresh_result_cache();
    }

    #[test]
    fn test_idle_render_shows_chrome() {
        let mut app = test_app();

        let output = render_to_string(&mut app, 80, 24);

        assert!(output.contains("Query"));
        assert!(output.contains("Response"));
        assert!(output.contains("Enter: Send"));
    }

    #[test]
    fn test_idle_render_names_the_endpoint() {
        let mut app = test_app();

        let output = render_to_string(&mut app, 80, 24);

        assert!(output.contains("http://127.0.0.1:1/demo"));
    }

    #[test]
    fn test_pending_render_shows_sending_indicator() {
        let mut app = test_app();
        app.input.textarea.insert_str("hello");
        app.submit_query();

        let output = render_to_string(&mut app, 80, 24);

        assert!(output.contains("(sending...)"));
    }

    #[test]
    fn test_success_render_shows_payload() {
        let mut app = test_app();
        set_result(
            &mut app,
            ExchangeResult::Success(json!({"query": "hi", "answer": "Hello! You sent: hi"})),
        );

        let output = render_to_string(&mut app, 80, 24);

        assert!(output.contains("Hello! You sent: hi"));
    }

    #[test]
    fn test_failure_render_shows_diagnostic() {
        let mut app = test_app();
        set_result(
            &mut app,
            ExchangeResult::Failure("Request failed with HTTP status 500".to_string()),
        );

        let output = render_to_string(&mut app, 80, 24);

        assert!(output.contains("500"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let mut app = test_app();
        set_result(&mut app, ExchangeResult::Success(json!({"query": "x"})));

        // Must not panic on degenerate sizes
        let _ = render_to_string(&mut app, 10, 5);
        let _ = render_to_string(&mut app, 3, 3);
    }
}
