use crate::deck::LinkTarget;
use iced::widget::scrollable::AbsoluteOffset;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    /// The metadata task settled with the effective page count (already
    /// defaulted on failure; the fetch itself is infallible).
    MetadataLoaded(u32),
    Tick(Instant),
    Scrolled {
        offset: AbsoluteOffset,
        viewport_width: f32,
        viewport_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    /// Jump requests from the header, the collapsible menu, the progress
    /// rail and the logo all funnel through here.
    JumpToPage(u32),
    ToggleMenu,
    ScrollToTop,
    /// An overlay or footer link was activated.
    LinkActivated(LinkTarget),
}
