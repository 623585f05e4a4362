//! Nav drawer: the mobile-menu analog, a narrow panel sliding in from
//! the left edge over the browse content.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, NAV_ENTRIES};

pub fn render_drawer(frame: &mut Frame, area: Rect, app: &App) {
    if !app.nav_drawer_open {
        return;
    }
    let palette = app.theme.palette();

    let width = 22.min(area.width);
    let drawer_area = Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    };
    frame.render_widget(Clear, drawer_area);

    let block = Block::default()
        .title(Span::styled(
            " Menu ",
            Style::default()
                .fg(palette.header)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.dialog_bg));
    let inner = block.inner(drawer_area);
    frame.render_widget(block, drawer_area);

    let mut lines = Vec::new();
    for (i, entry) in NAV_ENTRIES.iter().enumerate() {
        let (marker, style) = if i == app.nav_index {
            (
                "\u{25b8} ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(palette.dim))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(*entry, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
