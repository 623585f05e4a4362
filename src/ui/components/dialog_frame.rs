//! Centered dialog frame with a dimmed backdrop.
//!
//! Dims the whole screen behind the dialog (the backdrop region used for
//! click-to-dismiss), clears the dialog rect, and draws a rounded border
//! with a bold title. Returns both the dialog rect (hit area for click
//! detection) and the inner content rect.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::theme::Palette;

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Minimum width
    pub min_width: u16,
    /// Maximum width
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 36,
            max_width: 56,
        }
    }
}

/// Dialog width: half the screen on roomy terminals, nearly full width on
/// narrow ones, always within the configured bounds.
fn calculate_dialog_width(config: &DialogFrameConfig, area_width: u16) -> u16 {
    let preferred = if area_width < 60 {
        area_width.saturating_sub(4)
    } else {
        area_width / 2
    };
    preferred.clamp(config.min_width.min(area_width.saturating_sub(4)), config.max_width)
}

/// Render the backdrop and dialog frame.
///
/// Returns `(dialog_area, inner_area)`: the dialog rect for backdrop
/// click detection and the inner rect for content.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    config: &DialogFrameConfig,
) -> (Rect, Rect) {
    // Dim everything behind the dialog; this is the backdrop region.
    let backdrop = Block::default().style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(backdrop, area);

    let dialog_width = calculate_dialog_width(config, area.width);
    let dialog_height = (config.content_height + 2).min(area.height);

    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect {
        x: area.x + x,
        y: area.y + y,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(palette.header)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.dialog_bg));
    frame.render_widget(block, dialog_area);

    let inner = Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    };
    (dialog_area, inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_clamped_to_bounds() {
        let config = DialogFrameConfig::new("Test", 10);
        assert_eq!(calculate_dialog_width(&config, 200), 56);
        assert_eq!(calculate_dialog_width(&config, 100), 50);
    }

    #[test]
    fn test_width_on_narrow_terminal() {
        let config = DialogFrameConfig::new("Test", 10);
        let width = calculate_dialog_width(&config, 40);
        assert!(width <= 36);
    }
}
