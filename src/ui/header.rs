//! Top header bar: logo, search box, auth buttons or signed-in badge.
//!
//! Once the page is scrolled past the threshold the header picks up a
//! background fill, mirroring the web page's compressed sticky header.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let mut block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(palette.border));
    if app.header_scrolled() {
        block = block.style(Style::default().bg(palette.header_scrolled_bg));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(30),
        ])
        .split(inner);

    let logo = Paragraph::new(Line::from(Span::styled(
        " NULLFORUMS ",
        Style::default()
            .fg(palette.header)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(logo, chunks[0]);

    render_search_box(frame, chunks[1], app);
    render_auth_area(frame, chunks[2], app);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let focused = app.focus == Focus::Search && app.overlays.top().is_none();

    let mut spans = vec![Span::styled("/ ", Style::default().fg(palette.dim))];
    if app.search.query.is_empty() && !focused {
        spans.push(Span::styled(
            "Search forums...",
            Style::default().fg(palette.dim),
        ));
    } else {
        spans.push(Span::styled(
            app.search.query.as_str(),
            Style::default().fg(palette.accent),
        ));
    }
    if focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(palette.accent),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_auth_area(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    // The badge is built as plain spans from sanitized data; no markup
    // is ever interpolated.
    let line = match &app.session_user {
        Some(user) => Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(palette.success)),
            Span::styled(
                user.as_str(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  signed in", Style::default().fg(palette.dim)),
        ]),
        None => Line::from(vec![
            Span::styled("[l]", Style::default().fg(palette.accent)),
            Span::styled(" Login  ", Style::default().fg(palette.dim)),
            Span::styled("[r]", Style::default().fg(palette.accent)),
            Span::styled(" Register", Style::default().fg(palette.dim)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
