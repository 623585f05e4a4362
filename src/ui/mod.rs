//! UI rendering for the NullForums front page.
//!
//! Layer order, bottom to top: header + scrollable browse content +
//! footer, then the nav drawer, then the modal dialog with its dimmed
//! backdrop, then the toast banner. Every layer pulls its colors from
//! the active theme palette.

mod browse;
pub mod components;
mod drawer;
mod footer;
mod header;
mod modal;
mod toast;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use browse::render_browse;
use drawer::render_drawer;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use toast::render_toast;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_browse(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    render_drawer(frame, chunks[1], app);
    render_modal(frame, area, app);
    render_toast(frame, area, app);
}
