use super::super::state::{App, Glide};
use super::Effect;
use iced::widget::scrollable::AbsoluteOffset;
use std::time::{Duration, Instant};

/// Length of a smooth jump scroll.
const GLIDE_DURATION: Duration = Duration::from_millis(500);

impl App {
    /// Fold one scroll notification into state and re-derive everything that
    /// depends on it. Notifications are fire-and-forget: each one fully
    /// supersedes the previous derivation, there is no backlog.
    pub(super) fn handle_scrolled(
        &mut self,
        offset: AbsoluteOffset,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        // Ticks stop while nothing animates, so the clock can be stale here;
        // a reveal armed from this event must start at zero progress.
        self.now = Instant::now();
        self.viewport.y = sanitize(offset.y);
        if viewport_width.is_finite() && viewport_width > 0.0 {
            self.viewport.width = viewport_width;
        }
        if viewport_height.is_finite() && viewport_height > 0.0 {
            self.viewport.height = viewport_height;
        }
        self.derive_scroll_state();
    }

    pub(super) fn handle_resized(&mut self, width: f32, height: f32) {
        self.now = Instant::now();
        if width.is_finite() && width > 0.0 {
            self.viewport.width = width;
        }
        if height.is_finite() && height > 0.0 {
            self.viewport.height = height;
        }
        // A wider viewport can pull more artboards into view.
        self.derive_scroll_state();
    }

    /// Start a smooth scroll towards `target`. Returns an immediate offset
    /// instead when motion is reduced. A new jump supersedes any glide still
    /// in flight.
    pub(super) fn begin_glide(&mut self, target: f32) -> Option<f32> {
        // Same staleness hazard as `handle_scrolled`: a glide started from a
        // stale clock would be consumed as already finished.
        self.now = Instant::now();
        if self.config.reduced_motion {
            self.glide = None;
            return Some(target);
        }
        self.glide = Some(Glide {
            from: self.viewport.y,
            to: target,
            since: self.now,
        });
        None
    }

    /// Advance an in-flight glide by one tick.
    pub(super) fn step_glide(&mut self, effects: &mut Vec<Effect>) {
        let Some(glide) = self.glide else {
            return;
        };
        let elapsed = self.now.duration_since(glide.since).as_secs_f32();
        let t = (elapsed / GLIDE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        effects.push(Effect::SnapTo(glide_position(glide.from, glide.to, t)));
        if t >= 1.0 {
            self.glide = None;
        }
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Ease-in-out interpolation between two offsets.
fn glide_position(from: f32, to: f32, t: f32) -> f32 {
    let eased = if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    };
    from + (to - from) * eased
}
