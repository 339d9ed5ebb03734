//! Per-page entrance reveal.
//!
//! Each artboard fades in the first time it enters the viewport (with a small
//! inward margin) and never replays: `Hidden -> Entering -> Settled`, no
//! reverse transitions. Re-scrolling past an already revealed page is a
//! no-op, whatever the intersection reports afterwards.

use std::time::{Duration, Instant};

/// Length of the entrance fade.
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);

/// Inward viewport margin (fraction of viewport height) a page must cross
/// before its reveal arms.
pub const REVEAL_MARGIN: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Entering { since: Instant },
    Settled,
}

impl Default for Reveal {
    fn default() -> Self {
        Reveal::Hidden
    }
}

impl Reveal {
    /// Arm the reveal. Returns whether a transition happened; at most one per
    /// session. With `animate` off (reduced motion) the page settles
    /// immediately but the bookkeeping is identical.
    pub fn mark_visible(&mut self, now: Instant, animate: bool) -> bool {
        match self {
            Reveal::Hidden => {
                *self = if animate {
                    Reveal::Entering { since: now }
                } else {
                    Reveal::Settled
                };
                true
            }
            Reveal::Entering { .. } | Reveal::Settled => false,
        }
    }

    /// Promote a finished entrance to `Settled` so the tick subscription can
    /// shut down once nothing animates.
    pub fn tick(&mut self, now: Instant) {
        if let Reveal::Entering { since } = *self {
            if now.duration_since(since) >= REVEAL_DURATION {
                *self = Reveal::Settled;
            }
        }
    }

    pub fn is_revealed(&self) -> bool {
        !matches!(self, Reveal::Hidden)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Reveal::Entering { .. })
    }

    /// Eased opacity in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        match self {
            Reveal::Hidden => 0.0,
            Reveal::Settled => 1.0,
            Reveal::Entering { since } => {
                let elapsed = now.duration_since(*since).as_secs_f32();
                let t = (elapsed / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
                ease_out(t)
            }
        }
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_at_most_once() {
        let mut reveal = Reveal::default();
        let now = Instant::now();
        assert!(!reveal.is_revealed());
        assert!(reveal.mark_visible(now, true));
        assert!(reveal.is_revealed());
        assert!(!reveal.mark_visible(now, true));
        assert!(!reveal.mark_visible(now + REVEAL_DURATION, true));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn never_reverts_after_settling() {
        let mut reveal = Reveal::default();
        let now = Instant::now();
        reveal.mark_visible(now, true);
        reveal.tick(now + REVEAL_DURATION);
        assert_eq!(reveal, Reveal::Settled);
        assert!(!reveal.mark_visible(now + REVEAL_DURATION * 2, true));
        assert_eq!(reveal, Reveal::Settled);
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let mut reveal = Reveal::default();
        let now = Instant::now();
        assert_eq!(reveal.progress(now), 0.0);
        reveal.mark_visible(now, true);
        let mid = reveal.progress(now + REVEAL_DURATION / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(reveal.progress(now + REVEAL_DURATION), 1.0);
    }

    #[test]
    fn reduced_motion_settles_immediately() {
        let mut reveal = Reveal::default();
        let now = Instant::now();
        assert!(reveal.mark_visible(now, false));
        assert_eq!(reveal, Reveal::Settled);
        assert_eq!(reveal.progress(now), 1.0);
        assert!(!reveal.is_animating());
    }

    #[test]
    fn tick_only_settles_finished_entrances() {
        let mut reveal = Reveal::default();
        let now = Instant::now();
        reveal.mark_visible(now, true);
        reveal.tick(now + Duration::from_millis(100));
        assert!(reveal.is_animating());
        reveal.tick(now + REVEAL_DURATION);
        assert_eq!(reveal, Reveal::Settled);
    }
}
