//! Bottom hint bar with contextual keybinds and the back-to-top
//! indicator.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let dim = Style::default().fg(palette.dim);
    let key = Style::default().fg(palette.accent);

    let mut spans = Vec::new();
    let mut bind = |k: &'static str, label: &'static str| {
        spans.push(Span::styled(format!(" {k}"), key));
        spans.push(Span::styled(format!(" {label} "), dim));
    };

    if app.overlays.top().is_some() {
        bind("Tab", "next field");
        bind("Enter", "submit");
        bind("^O", "other dialog");
        bind("^R", "show/hide password");
        bind("Esc", "close");
    } else if app.focus == Focus::Search {
        bind("Enter", "search");
        bind("Esc", "back");
    } else {
        bind("/", "search");
        bind("m", "menu");
        bind("t", "theme");
        if app.session_user.is_some() {
            bind("o", "sign out");
        }
        bind("q", "quit");
        if app.show_back_to_top() {
            bind("g", "back to top \u{2191}");
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
