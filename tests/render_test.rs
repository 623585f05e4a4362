//! Render smoke tests on a TestBackend: browse screen, open dialogs,
//! toast banner, nav drawer, both themes. These assert on buffer text,
//! not exact styling.

use std::time::Instant;

use ratatui::{backend::TestBackend, Terminal};

use nullforums::app::App;
use nullforums::overlay::OverlayKind;
use nullforums::theme::Theme;
use nullforums::toast::Severity;
use nullforums::ui;

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_browse_screen_shows_sections() {
    let mut app = App::new(Theme::Dark);
    let screen = draw(&mut app, 100, 40);

    assert!(screen.contains("NULLFORUMS"));
    assert!(screen.contains("FORUMS"));
    assert!(screen.contains("RECENT POSTS"));
    assert!(screen.contains("General Discussion"));
    assert!(screen.contains("Login"));
}

#[test]
fn test_render_updates_scroll_bounds() {
    let mut app = App::new(Theme::Dark);
    draw(&mut app, 100, 12);
    assert!(app.max_scroll > 0, "short viewport must produce scroll range");
    assert_eq!(app.viewport_height, 8); // 12 - header 3 - footer 1
}

#[test]
fn test_login_dialog_renders_fields() {
    let mut app = App::new(Theme::Dark);
    app.overlays.open(OverlayKind::Login);
    let screen = draw(&mut app, 100, 40);

    assert!(screen.contains("Sign In"));
    assert!(screen.contains("Username"));
    assert!(screen.contains("Password"));
    assert!(app.modal_area.is_some(), "modal hit area must be recorded");
}

#[test]
fn test_register_dialog_renders_terms_checkbox() {
    let mut app = App::new(Theme::Dark);
    app.overlays.open(OverlayKind::Register);
    let screen = draw(&mut app, 100, 40);

    assert!(screen.contains("Create Account"));
    assert!(screen.contains("Terms of Service"));
    assert!(screen.contains("[ ]"));

    app.register_form.agree_terms = true;
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("[x]"));
}

#[test]
fn test_password_masking_in_login_dialog() {
    let mut app = App::new(Theme::Dark);
    app.overlays.open(OverlayKind::Login);
    app.login_form.password = "secret".into();
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"));
    assert!(!screen.contains("secret"));

    app.login_form.show_password = true;
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("secret"));
}

#[test]
fn test_toast_banner_visible() {
    let now = Instant::now();
    let mut app = App::new(Theme::Dark);
    app.toast.show("Searching for: \"rust\"", Severity::Info, now);
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("Searching for: \"rust\""));

    app.toast.hide();
    let screen = draw(&mut app, 100, 40);
    assert!(!screen.contains("Searching for"));
}

#[test]
fn test_nav_drawer_lists_entries() {
    let mut app = App::new(Theme::Dark);
    app.nav_drawer_open = true;
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("Menu"));
    assert!(screen.contains("Recent Posts"));
}

#[test]
fn test_signed_in_badge_replaces_auth_buttons() {
    let mut app = App::new(Theme::Dark);
    app.session_user = Some("CyberNinja".into());
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("CyberNinja"));
    assert!(screen.contains("signed in"));
    assert!(!screen.contains("Register"));
}

#[test]
fn test_light_theme_renders() {
    let mut app = App::new(Theme::Light);
    let screen = draw(&mut app, 100, 40);
    assert!(screen.contains("NULLFORUMS"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new(Theme::Dark);
    app.overlays.open(OverlayKind::Register);
    let now = Instant::now();
    app.toast.show("hi", Severity::Error, now);
    app.nav_drawer_open = true;
    draw(&mut app, 20, 6);
}

#[test]
fn test_completed_counters_show_formatted_targets() {
    let mut app = App::new(Theme::Dark);
    app.viewport_height = 30;
    let now = Instant::now();
    app.tick(now); // triggers visibility at scroll 0
    for _ in 0..200 {
        app.tick(now);
    }
    let screen = draw(&mut app, 110, 40);
    assert!(screen.contains("1.5M"));
    assert!(screen.contains("8.2M"));
    assert!(screen.contains("2.5K"));
}
