use super::messages::Message;
use super::state::{App, DECK_SCROLL_ID};
use crate::deck::LinkTarget;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::{time, window, Subscription, Task};
use std::time::Duration;
use tracing::warn;

mod gate;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    /// Start a smooth scroll towards an absolute offset.
    GlideTo(f32),
    /// Move the scrollable immediately (glide steps, reduced motion).
    SnapTo(f32),
    /// Hand an external or mailto target to the OS.
    OpenLink(LinkTarget),
}

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let resizes = window::resize_events()
            .map(|(_id, size)| Message::WindowResized { width: size.width, height: size.height });
        if app.is_animating() {
            let ticks = time::every(Duration::from_millis(16)).map(Message::Tick);
            Subscription::batch([resizes, ticks])
        } else {
            resizes
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut effects = Vec::new();
        match message {
            Message::MetadataLoaded(total) => self.handle_metadata_loaded(total),
            Message::Tick(now) => self.handle_tick(now, &mut effects),
            Message::Scrolled { offset, viewport_width, viewport_height } => {
                self.handle_scrolled(offset, viewport_width, viewport_height);
            }
            Message::WindowResized { width, height } => self.handle_resized(width, height),
            Message::JumpToPage(page) => self.handle_jump_to_page(page, &mut effects),
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::ScrollToTop => self.handle_scroll_to_top(&mut effects),
            Message::LinkActivated(target) => self.handle_link(target, &mut effects),
        }
        self.perform(effects)
    }

    fn perform(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks: Vec<Task<Message>> = Vec::new();
        for effect in effects {
            match effect {
                Effect::GlideTo(target) => {
                    if let Some(snap) = self.begin_glide(target) {
                        tasks.push(snap_task(snap));
                    }
                }
                Effect::SnapTo(offset) => tasks.push(snap_task(offset)),
                Effect::OpenLink(target) => open_link(&target),
            }
        }
        Task::batch(tasks)
    }
}

fn snap_task(y: f32) -> Task<Message> {
    scrollable::scroll_to(DECK_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
}

/// External and mailto targets leave through the OS with no back-reference
/// to the document. Failures degrade silently, like every error here.
fn open_link(target: &LinkTarget) {
    let uri = match target {
        LinkTarget::External(url) => url.clone(),
        LinkTarget::Mailto(address) => format!("mailto:{address}"),
        LinkTarget::Page(_) => return,
    };
    if let Err(err) = open::that_detached(&uri) {
        warn!(%uri, %err, "Could not open external link");
    }
}
