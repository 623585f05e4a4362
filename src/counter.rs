//! Animated statistic counters for the stats strip.
//!
//! Each counter counts up from zero to its target over a fixed duration,
//! advanced once per 16 ms app tick. The animation starts the first time
//! the stats section scrolls into view and never restarts; on completion
//! the display snaps to the exactly-formatted target so no overshoot or
//! rounded-down intermediate value persists.

/// Total count-up duration in milliseconds.
const ANIMATION_MS: f64 = 2000.0;

/// Milliseconds per animation step (one app tick).
const TICK_MS: f64 = 16.0;

/// A single animated statistic.
#[derive(Debug)]
pub struct StatCounter {
    pub label: &'static str,
    pub target: u64,
    current: f64,
    done: bool,
}

impl StatCounter {
    pub fn new(label: &'static str, target: u64) -> Self {
        Self {
            label,
            target,
            current: 0.0,
            done: false,
        }
    }

    /// Advance one tick. Increment is target / (duration / tick), so the
    /// full run takes ~2 seconds regardless of magnitude.
    fn advance(&mut self) {
        if self.done {
            return;
        }
        self.current += self.target as f64 / (ANIMATION_MS / TICK_MS);
        if self.current >= self.target as f64 {
            self.done = true;
        }
    }

    /// The value to render right now. Intermediate frames floor the
    /// running value; the final frame is the target itself.
    pub fn display(&self) -> String {
        if self.done {
            format_count(self.target)
        } else {
            format_count(self.current as u64)
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// The stats strip: a fixed set of counters sharing one visibility
/// trigger.
#[derive(Debug)]
pub struct CounterBoard {
    pub counters: Vec<StatCounter>,
    started: bool,
}

impl CounterBoard {
    pub fn new(counters: Vec<StatCounter>) -> Self {
        Self {
            counters,
            started: false,
        }
    }

    /// Fires when the stats section first becomes at least half visible.
    /// Subsequent calls are ignored, so re-entering view never restarts
    /// the animation.
    pub fn mark_visible(&mut self) {
        self.started = true;
    }

    /// Advance all counters one tick. Returns true if any counter moved
    /// on this tick (including the final snap-to-target frame), so the
    /// caller knows to redraw.
    pub fn advance(&mut self) -> bool {
        if !self.started {
            return false;
        }
        let mut changed = false;
        for counter in &mut self.counters {
            if !counter.is_done() {
                counter.advance();
                changed = true;
            }
        }
        changed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}

/// Format a count the way the forum header shows it: 1.5M, 2.5K, or a
/// thousands-grouped plain number.
pub fn format_count(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        group_thousands(value)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(2_000_000), "2.0M");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_count(2_500), "2.5K");
        assert_eq!(format_count(999_999), "1000.0K");
    }

    #[test]
    fn test_format_small_grouped() {
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_grouping() {
        // Values below the K threshold never reach group_thousands with
        // more digits in format_count, but the helper handles any size.
        assert_eq!(group_thousands(1_234), "1,234");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_animation_completes_at_exact_target() {
        let mut board = CounterBoard::new(vec![StatCounter::new("Members", 1_500_000)]);
        board.mark_visible();

        // 2000ms / 16ms = 125 ticks to completion.
        for _ in 0..125 {
            board.advance();
        }
        assert!(board.counters[0].is_done());
        assert_eq!(board.counters[0].display(), "1.5M");
    }

    #[test]
    fn test_not_started_until_visible() {
        let mut board = CounterBoard::new(vec![StatCounter::new("Posts", 2_500)]);
        assert!(!board.advance());
        assert_eq!(board.counters[0].display(), "0");

        board.mark_visible();
        assert!(board.advance());
    }

    #[test]
    fn test_over_advancing_stays_at_target() {
        let mut board = CounterBoard::new(vec![StatCounter::new("Online", 42)]);
        board.mark_visible();
        for _ in 0..300 {
            board.advance();
        }
        assert_eq!(board.counters[0].display(), "42");
    }
}
