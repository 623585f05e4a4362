//! Toast banner rendering.
//!
//! One banner in the top-right corner, colored by severity. A notifier
//! with nothing visible renders nothing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::toast::Severity;

pub fn render_toast(frame: &mut Frame, area: Rect, app: &App) {
    if !app.toast.is_visible() {
        return;
    }
    let palette = app.theme.palette();
    let color = match app.toast.severity() {
        Severity::Success => palette.success,
        Severity::Error => palette.error,
        Severity::Warning => palette.warning,
        Severity::Info => palette.info,
    };

    let message = app.toast.message();
    let max_text = area.width.saturating_sub(10) as usize;
    let text = if message.width() > max_text {
        format!("{}\u{2026}", truncate_to_width(message, max_text.saturating_sub(1)))
    } else {
        message.to_string()
    };

    // icon + space + text + borders + padding
    let width = (text.width() as u16 + 8).min(area.width);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 3,
    };
    // Not enough rows below the top margin for the banner.
    if area.height < 4 {
        return;
    }

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.toast.severity().icon()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), toast_area);
}

/// Longest prefix whose display width fits in `max_width`. Wide
/// characters count for two columns, so a char-count cut is not enough.
fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, c) in text.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[..idx];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_display_columns() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_to_width("\u{6ce8}\u{518c}\u{6210}\u{529f}", 5), "\u{6ce8}\u{518c}");
        assert_eq!(truncate_to_width("\u{6ce8}\u{518c}", 4), "\u{6ce8}\u{518c}");
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }
}
