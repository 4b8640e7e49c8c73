use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Clear the area behind a floating widget
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
