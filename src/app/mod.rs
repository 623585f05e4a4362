//! Application state and logic for the TUI.
//!
//! [`App`] owns every piece of page-session UI state: the seeded forum
//! catalog, the overlay manager, the toast notifier, the counter board,
//! both auth forms, the search box, the nav drawer, and the theme. All
//! timed behavior (toast dismiss, overlay hand-off, counter steps,
//! debounced suggestions, the deferred signed-in badge) is driven from
//! [`App::tick`] against deadlines, never from detached timers.

mod handlers;
mod types;

pub use types::{Focus, NAV_ENTRIES};

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::counter::{CounterBoard, StatCounter};
use crate::forms::{LoginForm, RegisterForm};
use crate::overlay::OverlayManager;
use crate::search::SearchState;
use crate::state::ForumCatalog;
use crate::storage::{self, Preferences};
use crate::theme::Theme;
use crate::timing::Throttler;
use crate::toast::ToastNotifier;

/// Scroll offset past which the header renders in its "scrolled" style.
pub const HEADER_SCROLLED_AFTER: u16 = 3;

/// Scroll offset past which the back-to-top hint appears in the footer.
pub const BACK_TO_TOP_AFTER: u16 = 10;

/// Delay before the signed-in badge replaces the auth buttons after a
/// successful login or registration.
pub const BADGE_DELAY: Duration = Duration::from_millis(500);

/// Minimum gap between "load more posts" requests.
pub const LOAD_MORE_LIMIT: Duration = Duration::from_millis(1000);

/// Rows the stats strip occupies at the top of the scrollable content.
pub const STATS_ROWS: u16 = 4;

#[derive(Debug)]
struct PendingBadge {
    username: String,
    due: Instant,
}

/// Main application state
pub struct App {
    /// Seeded forum content
    pub catalog: ForumCatalog,
    /// Modal open/closed state, hand-off sequencing, scroll lock
    pub overlays: OverlayManager,
    /// The single transient notification banner
    pub toast: ToastNotifier,
    /// Animated statistic counters
    pub counters: CounterBoard,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub search: SearchState,
    /// Active display theme
    pub theme: Theme,
    /// Key routing target when no overlay is open
    pub focus: Focus,
    /// Nav drawer (mobile-menu analog)
    pub nav_drawer_open: bool,
    pub nav_index: usize,
    /// Signed-in username, once the deferred badge update has fired
    pub session_user: Option<String>,
    pending_badge: Option<PendingBadge>,
    /// Browse viewport scroll offset in content rows
    pub scroll: u16,
    /// Upper bound for `scroll`, recalculated during render
    pub max_scroll: u16,
    /// Height of the scrollable content viewport, set during render
    pub viewport_height: u16,
    /// Selected row in the recent-posts list
    pub selected_post: usize,
    /// Rate limit for the load-more placeholder
    pub load_more: Throttler,
    /// Last rendered modal dialog rect, for backdrop click detection
    pub modal_area: Option<Rect>,
    pub should_quit: bool,
    pub needs_redraw: bool,
    /// Tick counter for render-side animations
    pub tick_count: u64,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            catalog: ForumCatalog::seed(),
            overlays: OverlayManager::new(),
            toast: ToastNotifier::new(),
            counters: CounterBoard::new(vec![
                StatCounter::new("Members", 1_500_000),
                StatCounter::new("Posts", 8_200_000),
                StatCounter::new("Topics", 425_000),
                StatCounter::new("Online", 2_500),
            ]),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            search: SearchState::new(),
            theme,
            focus: Focus::default(),
            nav_drawer_open: false,
            nav_index: 0,
            session_user: None,
            pending_badge: None,
            scroll: 0,
            max_scroll: 0,
            viewport_height: 0,
            selected_post: 0,
            load_more: Throttler::new(LOAD_MORE_LIMIT),
            modal_area: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Drive every deadline. Called once per 16 ms tick from the event
    /// loop.
    pub fn tick(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(kind) = self.overlays.poll(now) {
            tracing::debug!("Overlay hand-off opened {:?}", kind);
            self.mark_dirty();
        }

        if self.toast.poll(now) {
            self.mark_dirty();
        }

        self.update_counter_visibility();
        if self.counters.advance() {
            self.mark_dirty();
        }

        if let Some(query) = self.search.poll_suggestion(now) {
            // Suggestion backend does not exist; this is the fetch point.
            tracing::debug!("Fetching search suggestions for {:?}", query);
        }

        if self.pending_badge.as_ref().is_some_and(|b| now >= b.due) {
            if let Some(badge) = self.pending_badge.take() {
                self.session_user = Some(badge.username);
                self.mark_dirty();
            }
        }
    }

    /// Start the counter animation once the stats strip is at least half
    /// inside the viewport. The trigger latches, so scrolling away and
    /// back never restarts it.
    fn update_counter_visibility(&mut self) {
        if self.counters.is_started() || self.viewport_height == 0 {
            return;
        }
        let visible_rows = STATS_ROWS
            .min(self.scroll + self.viewport_height)
            .saturating_sub(self.scroll);
        if visible_rows * 2 >= STATS_ROWS {
            self.counters.mark_visible();
            self.mark_dirty();
        }
    }

    /// Schedule the signed-in badge swap, mirroring the page's deferred
    /// post-login UI update.
    pub(crate) fn schedule_badge(&mut self, username: String, now: Instant) {
        self.pending_badge = Some(PendingBadge {
            username,
            due: now + BADGE_DELAY,
        });
    }

    /// Header renders in its scrolled style once the viewport has moved
    /// past the threshold.
    pub fn header_scrolled(&self) -> bool {
        self.scroll > HEADER_SCROLLED_AFTER
    }

    /// Whether the footer shows the back-to-top hint.
    pub fn show_back_to_top(&self) -> bool {
        self.scroll > BACK_TO_TOP_AFTER
    }

    /// Flip the theme and persist the preference. Persistence failures
    /// are logged, never surfaced: the toggle itself always succeeds.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let prefs = Preferences { theme: self.theme };
        match storage::get_data_dir() {
            Ok(dir) => {
                if let Err(e) = storage::save_preferences(&dir, &prefs) {
                    tracing::warn!("Failed to persist theme preference: {e:#}");
                }
            }
            Err(e) => tracing::warn!("No data directory for preferences: {e:#}"),
        }
        self.mark_dirty();
    }

    /// Clamp and apply a scroll delta, honoring the overlay scroll lock.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.overlays.scroll_locked() {
            return;
        }
        let next = (self.scroll as i32 + delta).clamp(0, self.max_scroll as i32);
        if next as u16 != self.scroll {
            self.scroll = next as u16;
            self.mark_dirty();
        }
    }

    /// Jump back to the top of the page (back-to-top control).
    pub fn scroll_to_top(&mut self) {
        if !self.overlays.scroll_locked() && self.scroll != 0 {
            self.scroll = 0;
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlayKind;
    use crate::toast::Severity;

    fn app() -> App {
        App::new(Theme::Dark)
    }

    #[test]
    fn test_counters_start_when_stats_visible_at_top() {
        let mut app = app();
        app.viewport_height = 20;
        app.tick(Instant::now());
        assert!(app.counters.is_started());
    }

    #[test]
    fn test_counters_wait_while_stats_scrolled_out() {
        let mut app = app();
        app.viewport_height = 20;
        app.max_scroll = 50;
        app.scroll = 30;
        app.tick(Instant::now());
        assert!(!app.counters.is_started());

        // Scrolling back up brings the strip into view and latches.
        app.scroll = 0;
        app.tick(Instant::now());
        assert!(app.counters.is_started());
    }

    #[test]
    fn test_scroll_locked_while_overlay_open() {
        let mut app = app();
        app.max_scroll = 40;
        app.scroll_by(5);
        assert_eq!(app.scroll, 5);

        app.overlays.open(OverlayKind::Login);
        app.scroll_by(5);
        assert_eq!(app.scroll, 5);

        app.overlays.close(OverlayKind::Login);
        app.scroll_by(5);
        assert_eq!(app.scroll, 10);
    }

    #[test]
    fn test_badge_applies_after_delay() {
        let now = Instant::now();
        let mut app = app();
        app.schedule_badge("CyberNinja".to_string(), now);

        app.tick(now + Duration::from_millis(499));
        assert_eq!(app.session_user, None);

        app.tick(now + Duration::from_millis(500));
        assert_eq!(app.session_user.as_deref(), Some("CyberNinja"));
    }

    #[test]
    fn test_tick_dismisses_toast() {
        let now = Instant::now();
        let mut app = app();
        app.toast.show("hello", Severity::Info, now);
        app.tick(now + Duration::from_millis(4001));
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_header_and_back_to_top_thresholds() {
        let mut app = app();
        assert!(!app.header_scrolled());
        app.max_scroll = 50;
        app.scroll = 4;
        assert!(app.header_scrolled());
        assert!(!app.show_back_to_top());
        app.scroll = 11;
        assert!(app.show_back_to_top());
    }
}
