//! The scrollable front page: stats strip, forum categories, recent
//! posts.
//!
//! Content is built as one line list and rendered through a scrolled
//! Paragraph; the builder also reports the total line count so the app
//! can clamp its scroll offset. The stats strip sits in the first
//! [`crate::app::STATS_ROWS`] rows, which is what the counter visibility
//! trigger measures against.

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::counter::format_count;
use crate::state::format_age;

/// Render the browse content into `area`, updating the app's scroll
/// bounds as a side effect.
pub fn render_browse(frame: &mut Frame, area: Rect, app: &mut App) {
    let lines = build_lines(app);
    app.viewport_height = area.height;
    app.max_scroll = (lines.len() as u16).saturating_sub(area.height);
    if app.scroll > app.max_scroll {
        app.scroll = app.max_scroll;
    }

    let paragraph = Paragraph::new(lines).scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn build_lines(app: &App) -> Vec<Line<'static>> {
    let palette = app.theme.palette();
    let dim = Style::default().fg(palette.dim);
    let accent = Style::default().fg(palette.accent);
    let bold = accent.add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();

    // Stats strip (STATS_ROWS rows: blank, values, labels, blank).
    lines.push(Line::default());
    let mut values = Vec::new();
    let mut labels = Vec::new();
    for counter in &app.counters.counters {
        values.push(Span::styled(format!("  {:>10}", counter.display()), bold));
        labels.push(Span::styled(format!("  {:>10}", counter.label), dim));
    }
    lines.push(Line::from(values));
    lines.push(Line::from(labels));
    lines.push(Line::default());

    // Forum categories.
    lines.push(Line::from(Span::styled("  FORUMS", bold)));
    lines.push(Line::default());
    for category in &app.catalog.categories {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", category.name), accent),
            Span::styled(
                format!(
                    "{:>8} topics  {:>8} posts",
                    format_count(category.topics),
                    format_count(category.posts)
                ),
                dim,
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", category.description),
            dim,
        )));
    }
    lines.push(Line::default());

    // Recent posts.
    lines.push(Line::from(Span::styled("  RECENT POSTS", bold)));
    lines.push(Line::default());
    let now = Utc::now();
    for (i, post) in app.catalog.recent.iter().enumerate() {
        let marker = if i == app.selected_post { "\u{25b8} " } else { "  " };
        let title_style = if i == app.selected_post { bold } else { accent };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), accent),
            Span::styled(format!("{:<44}", post.title), title_style),
            Span::styled(
                format!(
                    "{:<12} {:>3} replies  {}",
                    post.author,
                    post.replies,
                    format_age(post.posted_at, now)
                ),
                dim,
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  [n] load more posts",
        dim,
    )));

    lines
}
