use super::input_state::InputState;
use crate::clipboard;
use crate::config::{ClipboardBackend, Config};
use crate::exchange::{ExchangeResult, ExchangeState};
use crate::notification::NotificationState;
use crate::scroll::ScrollState;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    ResultsPane,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub exchange: ExchangeState,
    pub focus: Focus,
    pub results_scroll: ScrollState,
    pub should_quit: bool,
    pub notification: NotificationState,
    pub clipboard_backend: ClipboardBackend,
    /// Pre-rendered result text (pretty payload or diagnostic)
    rendered_result: Option<String>,
    /// Cached line count (computed once per result, not per render)
    cached_line_count: u32,
    /// Cached max line width (computed once per result, not per render)
    cached_max_line_width: u16,
}

impl App {
    /// Create a new App bound to the given endpoint
    pub fn new(endpoint: String, config: &Config) -> Self {
        Self {
            input: InputState::new(),
            exchange: ExchangeState::new(endpoint),
            focus: Focus::InputField,
            results_scroll: ScrollState::new(),
            should_quit: false,
            notification: NotificationState::new(),
            clipboard_backend: config.clipboard.backend,
            rendered_result: None,
            cached_line_count: 0,
            cached_max_line_width: 0,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Submit the current query
    ///
    /// Ignored while a request is in flight (the at-most-one-outstanding
    /// guard lives here, not in the submitter). The input text is left
    /// intact after submission.
    pub fn submit_query(&mut self) {
        if self.exchange.is_pending() {
            return;
        }

        let query = self.query().to_string();
        self.exchange.submit(&query);

        // Empty-trim submissions are silent no-ops inside the submitter
        if self.exchange.is_pending() {
            self.results_scroll.reset();
            self.refresh_result_cache();
        }
    }

    /// Clear the query text and the exchange result unconditionally
    pub fn reset(&mut self) {
        self.input.clear();
        self.exchange.reset();
        self.results_scroll.reset();
        self.refresh_result_cache();
    }

    /// Drain settled exchanges and refresh the display cache
    pub fn poll_exchange(&mut self) {
        if self.exchange.poll_reply() {
            self.results_scroll.reset();
            self.refresh_result_cache();
        }
    }

    /// Copy the response document to the clipboard
    ///
    /// Only meaningful in the Success state; otherwise a no-op.
    pub fn copy_payload(&mut self) {
        let Some(payload) = self.exchange.result.payload() else {
            return;
        };

        let text =
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

        match clipboard::copy_to_clipboard(&text, self.clipboard_backend) {
            Ok(()) => self.notification.show("Copied response"),
            Err(_) => self.notification.show_warning("Clipboard unavailable"),
        }
    }

    /// Pre-rendered text for the results pane, if the exchange settled
    pub fn result_text(&self) -> Option<&str> {
        self.rendered_result.as_deref()
    }

    /// Get the total number of lines in the current result text
    /// Note: Returns u32 to handle large payloads (>65K lines) correctly
    pub fn results_line_count(&self) -> u32 {
        self.cached_line_count
    }

    /// Get the maximum line width in the current result text
    pub fn max_line_width(&self) -> u16 {
        self.cached_max_line_width
    }

    /// Recompute the rendered text and its dimensions from the result slot
    pub(crate) fn refresh_result_cache(&mut self) {
        let text = match &self.exchange.result {
            ExchangeResult::Success(payload) => Some(
                serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()),
            ),
            ExchangeResult::Failure(message) => Some(message.clone()),
            ExchangeResult::Idle | ExchangeResult::Pending => None,
        };

        let (line_count, max_width) = text
            .as_deref()
            .map(|s| {
                let line_count = s.lines().count() as u32;
                let max_width = s
                    .lines()
                    .map(|l| l.len())
                    .max()
                    .unwrap_or(0)
                    .min(u16::MAX as usize) as u16;
                (line_count, max_width)
            })
            .unwrap_or((0, 0));

        self.rendered_result = text;
        self.cached_line_count = line_count;
        self.cached_max_line_width = max_width;
    }
}
