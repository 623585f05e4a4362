//! Modal overlay coordination.
//!
//! Tracks which overlays are open, derives the background scroll lock from
//! the set of open overlays (never a bare boolean, so closing one overlay
//! cannot unlock scrolling while another is still up), and sequences the
//! close-then-reopen hand-off used when switching between the login and
//! register dialogs.

use std::time::{Duration, Instant};

/// Delay between closing one overlay and opening the next during a
/// hand-off, letting the close transition settle first.
pub const HANDOFF_DELAY: Duration = Duration::from_millis(300);

/// The modal dialogs this app knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Login,
    Register,
}

#[derive(Debug)]
struct Handoff {
    to: OverlayKind,
    due: Instant,
}

/// Open/closed state for every overlay plus at most one pending hand-off.
#[derive(Debug, Default)]
pub struct OverlayManager {
    // Insertion-ordered set; the last entry is the topmost dialog.
    open: Vec<OverlayKind>,
    pending: Option<Handoff>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an overlay. Idempotent: opening an already-open overlay does
    /// not duplicate it in the set (no double scroll-lock count).
    pub fn open(&mut self, kind: OverlayKind) {
        if !self.is_open(kind) {
            self.open.push(kind);
        }
    }

    /// Close an overlay. No-op if it is not open.
    pub fn close(&mut self, kind: OverlayKind) {
        self.open.retain(|k| *k != kind);
    }

    /// Close every open overlay and cancel any pending hand-off
    /// (escape-key semantics).
    pub fn close_all(&mut self) {
        self.open.clear();
        self.pending = None;
    }

    /// Close `from` now and schedule `to` to open after `delay`.
    ///
    /// The close is committed before the hand-off is recorded, so `to`
    /// can never become visible ahead of `from`'s close. Only one
    /// hand-off is pending at a time; a newer one replaces it.
    pub fn switch_to(&mut self, from: OverlayKind, to: OverlayKind, delay: Duration, now: Instant) {
        self.close(from);
        self.pending = Some(Handoff { to, due: now + delay });
    }

    /// Drive the pending hand-off. Returns the overlay opened on this
    /// poll, if its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<OverlayKind> {
        if self.pending.as_ref().is_some_and(|h| now >= h.due) {
            let to = self.pending.take()?.to;
            self.open(to);
            return Some(to);
        }
        None
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.open.contains(&kind)
    }

    /// The topmost open overlay, if any.
    pub fn top(&self) -> Option<OverlayKind> {
        self.open.last().copied()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Background scrolling is locked while any overlay is open.
    /// Recomputed from the open set on every query.
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn has_pending_handoff(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_restores_scroll_lock() {
        let mut mgr = OverlayManager::new();
        assert!(!mgr.scroll_locked());

        mgr.open(OverlayKind::Login);
        assert!(mgr.scroll_locked());

        mgr.close(OverlayKind::Login);
        assert!(!mgr.scroll_locked());
    }

    #[test]
    fn test_lock_held_while_second_overlay_open() {
        let mut mgr = OverlayManager::new();
        mgr.open(OverlayKind::Login);
        mgr.open(OverlayKind::Register);

        mgr.close(OverlayKind::Login);
        assert!(mgr.scroll_locked());
        assert_eq!(mgr.top(), Some(OverlayKind::Register));

        mgr.close(OverlayKind::Register);
        assert!(!mgr.scroll_locked());
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut mgr = OverlayManager::new();
        mgr.open(OverlayKind::Login);
        mgr.open(OverlayKind::Login);
        assert_eq!(mgr.open_count(), 1);

        // A single close must be enough to release the lock.
        mgr.close(OverlayKind::Login);
        assert!(!mgr.scroll_locked());
    }

    #[test]
    fn test_switch_to_orders_close_before_open() {
        let now = Instant::now();
        let mut mgr = OverlayManager::new();
        mgr.open(OverlayKind::Login);

        mgr.switch_to(OverlayKind::Login, OverlayKind::Register, HANDOFF_DELAY, now);

        // Close committed immediately; register not yet open.
        assert!(!mgr.is_open(OverlayKind::Login));
        assert!(!mgr.is_open(OverlayKind::Register));

        assert_eq!(mgr.poll(now + Duration::from_millis(299)), None);
        assert!(!mgr.is_open(OverlayKind::Register));

        assert_eq!(
            mgr.poll(now + Duration::from_millis(300)),
            Some(OverlayKind::Register)
        );
        assert!(mgr.is_open(OverlayKind::Register));
        assert!(!mgr.has_pending_handoff());
    }

    #[test]
    fn test_close_all_cancels_pending_handoff() {
        let now = Instant::now();
        let mut mgr = OverlayManager::new();
        mgr.open(OverlayKind::Register);
        mgr.switch_to(OverlayKind::Register, OverlayKind::Login, HANDOFF_DELAY, now);

        mgr.close_all();
        assert!(!mgr.has_pending_handoff());
        assert_eq!(mgr.poll(now + Duration::from_secs(1)), None);
        assert!(!mgr.is_open(OverlayKind::Login));
    }

    #[test]
    fn test_newer_switch_replaces_pending() {
        let now = Instant::now();
        let mut mgr = OverlayManager::new();
        mgr.open(OverlayKind::Login);
        mgr.switch_to(OverlayKind::Login, OverlayKind::Register, HANDOFF_DELAY, now);
        mgr.poll(now + HANDOFF_DELAY);
        mgr.switch_to(
            OverlayKind::Register,
            OverlayKind::Login,
            HANDOFF_DELAY,
            now + Duration::from_millis(400),
        );

        // Only the newest hand-off fires.
        assert_eq!(
            mgr.poll(now + Duration::from_millis(700)),
            Some(OverlayKind::Login)
        );
        assert_eq!(mgr.open_count(), 1);
    }
}
