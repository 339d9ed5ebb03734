use super::messages::Message;
use crate::assets;
use crate::config::{AppConfig, ThemeMode};
use crate::deck::{self, DeckLayout, PageDescriptor, Reveal, DEFAULT_ASPECT, REVEAL_MARGIN};
use crate::metadata::{self, MetadataSource};
use crate::nav::NavState;
use iced::widget::scrollable;
use iced::Task;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub(super) static DECK_SCROLL_ID: Lazy<scrollable::Id> =
    Lazy::new(|| scrollable::Id::new("deck-scroll"));

/// The loading screen stays up at least this long.
pub(super) const MIN_LOADING: Duration = Duration::from_millis(600);

/// One-shot loading gate. Pages are only constructed at the transition to
/// `Ready`, so per-page reveal observers initialize exactly once; nothing
/// ever transitions back.
pub(super) enum Phase {
    Loading {
        since: Instant,
        /// Settled page count, once the metadata task reports in.
        total: Option<u32>,
    },
    Ready,
}

/// Measured scroll viewport, fed by scroll and resize notifications.
#[derive(Debug, Clone, Copy)]
pub(super) struct ScrollViewport {
    pub width: f32,
    pub height: f32,
    pub y: f32,
}

/// An in-flight smooth scroll towards a jump target.
#[derive(Debug, Clone, Copy)]
pub(super) struct Glide {
    pub from: f32,
    pub to: f32,
    pub since: Instant,
}

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) assets_dir: PathBuf,
    /// Artboard height over width, probed from the cover asset.
    pub(super) aspect: f32,
    pub(super) phase: Phase,
    pub(super) total_pages: u32,
    pub(super) pages: Vec<PageDescriptor>,
    pub(super) reveals: Vec<Reveal>,
    pub(super) nav: NavState,
    pub(super) viewport: ScrollViewport,
    pub(super) glide: Option<Glide>,
    /// Animation clock, advanced by tick messages.
    pub(super) now: Instant,
}

impl App {
    pub fn bootstrap(config: AppConfig, assets_dir: PathBuf) -> (App, Task<Message>) {
        let aspect = assets::probe_aspect(&assets::page_image_path(&assets_dir, 1))
            .unwrap_or(DEFAULT_ASPECT);
        let now = Instant::now();
        let app = App {
            viewport: ScrollViewport {
                width: config.window_width,
                height: config.window_height,
                y: 0.0,
            },
            config,
            assets_dir,
            aspect,
            phase: Phase::Loading { since: now, total: None },
            total_pages: 0,
            pages: Vec::new(),
            reveals: Vec::new(),
            nav: NavState::default(),
            glide: None,
            now,
        };

        let source =
            MetadataSource::resolve(app.config.metadata_source.as_deref(), &app.assets_dir);
        let fetch = Task::perform(
            async move { metadata::fetch_total_pages(&source).await },
            Message::MetadataLoaded,
        );
        (app, fetch)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.config.theme
    }

    pub(super) fn layout(&self) -> DeckLayout {
        DeckLayout::new(
            self.viewport.width,
            self.viewport.height,
            self.total_pages,
            self.aspect,
        )
    }

    /// Whether the tick subscription needs to keep running.
    pub(super) fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
            || self.glide.is_some()
            || self.reveals.iter().any(Reveal::is_animating)
    }

    /// Open the loading gate: build the page sequence and run the initial
    /// visibility pass so pages already in the viewport reveal immediately.
    pub(super) fn open_gate(&mut self, total: u32) {
        self.total_pages = total;
        self.pages = deck::generate(total, &self.assets_dir);
        self.reveals = vec![Reveal::default(); self.pages.len()];
        self.phase = Phase::Ready;
        info!(total, "Deck ready");
        self.derive_scroll_state();
    }

    /// Recompute everything derived from the scroll position: per-page
    /// reveals (monotonic) and the navigation display state.
    pub(super) fn derive_scroll_state(&mut self) {
        let layout = self.layout();
        let animate = !self.config.reduced_motion;
        for (idx, reveal) in self.reveals.iter_mut().enumerate() {
            let number = idx as u32 + 1;
            if layout.intersects_viewport(number, self.viewport.y, REVEAL_MARGIN)
                && reveal.mark_visible(self.now, animate)
            {
                debug!(page = number, "Artboard entered the viewport");
            }
        }
        self.nav.observe_scroll(self.viewport.y, &layout);
    }
}
