//! Text input field for dialog forms.
//!
//! Label, bordered input box with optional password masking, and a block
//! cursor when focused. Long values scroll left so the cursor stays
//! visible.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

/// Rows one input field occupies: label (1) + bordered box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub masked: bool,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            masked: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

/// Render an input field; consumes [`INPUT_FIELD_HEIGHT`] rows of `area`.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    config: &InputFieldConfig,
) {
    let label_style = if config.focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    let label_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 3,
    };
    let border_color = if config.focused {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette.input_bg));

    let mut content = if config.masked {
        "\u{2022}".repeat(config.value.chars().count())
    } else {
        config.value.to_string()
    };
    if config.focused {
        content.push('\u{2588}');
    }
    // Keep the tail (and cursor) in view on overflow.
    let visible_cols = input_area.width.saturating_sub(2) as usize;
    while content.width() > visible_cols && !content.is_empty() {
        content.remove(0);
    }

    let text_style = if config.focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        input_area,
    );
}
