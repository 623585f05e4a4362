//! Key and mouse event routing.
//!
//! Routing order: open overlay first (it captures all typing), then the
//! search box, then browse-screen bindings. Escape is global: it closes
//! every open overlay, then the nav drawer, then search focus.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::forms::{self, RegisterField};
use crate::overlay::{OverlayKind, HANDOFF_DELAY};
use crate::toast::Severity;

use super::{App, Focus, NAV_ENTRIES};

impl App {
    /// Handle a key press. Every press marks the UI dirty; the routing
    /// below decides state changes.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.mark_dirty();

        // Ctrl+C always quits.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if let Some(top) = self.overlays.top() {
            self.handle_overlay_key(top, key, now);
            return;
        }

        // Escape closes the drawer or leaves search before anything else.
        // A dialog switch in flight has no overlay on top yet, so it is
        // cancelled here rather than in the overlay handler.
        if key.code == KeyCode::Esc {
            if self.overlays.has_pending_handoff() {
                self.overlays.close_all();
            } else if self.nav_drawer_open {
                self.nav_drawer_open = false;
            } else {
                self.focus = Focus::Browse;
            }
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key, now),
            Focus::Browse => self.handle_browse_key(key, now),
        }
    }

    fn handle_overlay_key(&mut self, top: OverlayKind, key: KeyEvent, now: Instant) {
        match key.code {
            // Escape dismisses every open overlay.
            KeyCode::Esc => self.overlays.close_all(),
            KeyCode::Tab => match top {
                OverlayKind::Login => self.login_form.focus_next(),
                OverlayKind::Register => self.register_form.focus_next(),
            },
            KeyCode::Enter => match top {
                OverlayKind::Login => self.submit_login(now),
                OverlayKind::Register => self.submit_register(now),
            },
            // Ctrl+R toggles password visibility.
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => match top {
                OverlayKind::Login => self.login_form.show_password = !self.login_form.show_password,
                OverlayKind::Register => {
                    self.register_form.show_password = !self.register_form.show_password
                }
            },
            // Ctrl+O hands off to the other dialog (the "switch to
            // register"/"switch to login" link).
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let other = match top {
                    OverlayKind::Login => OverlayKind::Register,
                    OverlayKind::Register => OverlayKind::Login,
                };
                self.overlays.switch_to(top, other, HANDOFF_DELAY, now);
            }
            KeyCode::Char(' ')
                if top == OverlayKind::Register
                    && self.register_form.focus == RegisterField::Terms =>
            {
                self.register_form.agree_terms = !self.register_form.agree_terms;
            }
            KeyCode::Char(c) => match top {
                OverlayKind::Login => self.login_form.focused_value_mut().push(c),
                OverlayKind::Register => {
                    if let Some(value) = self.register_form.focused_value_mut() {
                        value.push(c);
                    }
                }
            },
            KeyCode::Backspace => match top {
                OverlayKind::Login => {
                    self.login_form.focused_value_mut().pop();
                }
                OverlayKind::Register => {
                    if let Some(value) = self.register_form.focused_value_mut() {
                        value.pop();
                    }
                }
            },
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter => {
                if let Some(query) = self.search.submit() {
                    self.toast
                        .show(format!("Searching for: \"{query}\""), Severity::Info, now);
                }
                self.focus = Focus::Browse;
            }
            KeyCode::Char(c) => {
                self.search.query.push(c);
                self.search.edited(now);
            }
            KeyCode::Backspace => {
                self.search.query.pop();
                self.search.edited(now);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent, now: Instant) {
        if self.nav_drawer_open {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.nav_index = self.nav_index.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.nav_index = (self.nav_index + 1).min(NAV_ENTRIES.len() - 1);
                }
                KeyCode::Enter => {
                    // Navigation backend does not exist.
                    tracing::debug!("Navigating to section {:?}", NAV_ENTRIES[self.nav_index]);
                    self.nav_drawer_open = false;
                }
                KeyCode::Char('m') => self.nav_drawer_open = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('l') => self.overlays.open(OverlayKind::Login),
            KeyCode::Char('r') => self.overlays.open(OverlayKind::Register),
            KeyCode::Char('m') => {
                self.nav_drawer_open = true;
                self.nav_index = 0;
            }
            KeyCode::Char('t') => self.toggle_theme(),
            // Sign out (the page-reload analog): drop the badge and
            // return to the top of a fresh page.
            KeyCode::Char('o') if self.session_user.is_some() => {
                self.session_user = None;
                self.scroll = 0;
            }
            KeyCode::Char('g') | KeyCode::Home => self.scroll_to_top(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height.max(1) as i32)),
            KeyCode::PageDown => self.scroll_by(self.viewport_height.max(1) as i32),
            KeyCode::Char('n') => {
                if self.load_more.allow(now) {
                    // Pagination backend does not exist.
                    tracing::debug!("Loading more posts...");
                }
            }
            KeyCode::Enter => {
                if let Some(post) = self.catalog.recent.get(self.selected_post) {
                    tracing::debug!("Navigating to post {:?}", post.title);
                }
            }
            KeyCode::Left => self.selected_post = self.selected_post.saturating_sub(1),
            KeyCode::Right => {
                let last = self.catalog.recent.len().saturating_sub(1);
                self.selected_post = (self.selected_post + 1).min(last);
            }
            _ => {}
        }
    }

    /// Handle a mouse event: wheel scrolling plus backdrop-click
    /// dismissal of the topmost overlay.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, _now: Instant) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(top) = self.overlays.top() else {
                    return;
                };
                // No committed frame for this dialog yet (a click can
                // land in the tick between open and the next redraw).
                let Some(area) = self.modal_area else {
                    return;
                };
                if !area.contains((mouse.column, mouse.row).into()) {
                    self.overlays.close(top);
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn submit_login(&mut self, now: Instant) {
        if !forms::check_login(&self.login_form, &mut self.toast, now) {
            return;
        }
        self.toast
            .show("Login successful! Welcome back.", Severity::Success, now);
        self.overlays.close(OverlayKind::Login);
        let username = forms::sanitize_display_name(&self.login_form.username);
        self.login_form.reset();
        self.schedule_badge(username, now);
    }

    fn submit_register(&mut self, now: Instant) {
        if !forms::check_register(&self.register_form, &mut self.toast, now) {
            return;
        }
        self.toast.show(
            "Registration successful! Welcome to NullForums.",
            Severity::Success,
            now,
        );
        self.overlays.close(OverlayKind::Register);
        let username = forms::sanitize_display_name(&self.register_form.username);
        self.register_form.reset();
        self.schedule_badge(username, now);
    }
}
