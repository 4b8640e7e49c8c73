//! Key handling for the results pane

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// Handle keys when the results pane is focused
pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => app.focus = Focus::InputField,

        KeyCode::Down | KeyCode::Char('j') => app.results_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.results_scroll.scroll_up(1),
        KeyCode::Left | KeyCode::Char('h') => app.results_scroll.scroll_left(4),
        KeyCode::Right | KeyCode::Char('l') => app.results_scroll.scroll_right(4),

        KeyCode::Char('d') if ctrl => app.results_scroll.page_down(),
        KeyCode::Char('u') if ctrl => app.results_scroll.page_up(),
        KeyCode::PageDown => app.results_scroll.page_down(),
        KeyCode::PageUp => app.results_scroll.page_up(),

        KeyCode::Char('g') | KeyCode::Home => app.results_scroll.jump_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.results_scroll.jump_to_bottom(),

        _ => {}
    }
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
