use super::super::state::{App, Phase, MIN_LOADING};
use super::Effect;
use std::time::Instant;
use tracing::debug;

impl App {
    /// Record the settled page count. A result arriving after the gate has
    /// opened is discarded; the gate never reopens.
    pub(super) fn handle_metadata_loaded(&mut self, total: u32) {
        match &mut self.phase {
            Phase::Loading { total: slot, .. } => {
                debug!(total, "Metadata settled");
                *slot = Some(total);
            }
            Phase::Ready => debug!(total, "Late metadata result discarded"),
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        self.now = now;
        match self.phase {
            Phase::Loading { since, total } => {
                // Reveal only once the minimum delay has passed and the
                // metadata task has settled, success or failure alike.
                if now.duration_since(since) >= MIN_LOADING {
                    if let Some(total) = total {
                        self.open_gate(total);
                    }
                }
            }
            Phase::Ready => {
                for reveal in &mut self.reveals {
                    reveal.tick(now);
                }
                self.step_glide(effects);
            }
        }
    }
}
