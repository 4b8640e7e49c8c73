//! Results pane rendering
//!
//! Shows whatever the exchange settled into: the response document
//! pretty-printed, the failure diagnostic, a waiting placeholder, or the
//! startup hint.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};
use crate::exchange::ExchangeResult;

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let viewport_height = area.height.saturating_sub(2);
    let viewport_width = area.width.saturating_sub(2);

    app.results_scroll
        .update_bounds(app.results_line_count(), viewport_height);
    app.results_scroll
        .update_h_bounds(app.max_line_width(), viewport_width);

    let border_color = if app.focus == Focus::ResultsPane {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title = title_line(&app.exchange.result);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let content = match &app.exchange.result {
        ExchangeResult::Success(_) => Paragraph::new(app.result_text().unwrap_or_default())
            .block(block)
            .scroll((app.results_scroll.offset, app.results_scroll.h_offset)),
        ExchangeResult::Failure(_) => Paragraph::new(app.result_text().unwrap_or_default())
            .style(Style::default().fg(Color::Red))
            .block(block)
            .scroll((app.results_scroll.offset, app.results_scroll.h_offset)),
        ExchangeResult::Pending => {
            Paragraph::new(format!("Waiting for {} ...", app.exchange.endpoint()))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block)
        }
        ExchangeResult::Idle => Paragraph::new(format!(
            "Type a query and press Enter to send it to {}",
            app.exchange.endpoint()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block),
    };

    frame.render_widget(content, area);
}

/// Title for the results pane
///
/// On success, echoes the payload's "query" field when the server sent
/// one. The field is a display convention, not a contract - its absence
/// changes nothing.
fn title_line(result: &ExchangeResult) -> Line<'static> {
    match result {
        ExchangeResult::Idle => Line::from(Span::styled(
            " Response ",
            Style::default().fg(Color::DarkGray),
        )),
        ExchangeResult::Pending => Line::from(Span::styled(
            " Response (waiting...) ",
            Style::default().fg(Color::Yellow),
        )),
        ExchangeResult::Success(payload) => {
            match payload.get("query").and_then(|v| v.as_str()) {
                Some(query) => Line::from(Span::styled(
                    format!(" Response - query: {} ", query),
                    Style::default().fg(Color::Cyan),
                )),
                None => Line::from(Span::styled(
                    " Response ",
                    Style::default().fg(Color::Cyan),
                )),
            }
        }
        ExchangeResult::Failure(_) => Line::from(Span::styled(
            " Request Failed ",
            Style::default().fg(Color::Red),
        )),
    }
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
