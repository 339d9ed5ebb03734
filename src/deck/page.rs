//! Static page descriptors.

use super::overlay::Overlay;
use crate::theme::palette;
use iced::Color;
use std::path::PathBuf;

/// The closed set of page implementations. The first five pages of the deck
/// carry bespoke content; everything after falls through to `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    Photo,
    Toolkit,
    BriefResume,
    Contents,
    Generic,
}

/// One full-viewport artboard: a background image (or a flat fallback color
/// when the asset is missing) plus an ordered content layer of overlays.
///
/// Descriptors are built once at composition time and never mutated; the only
/// runtime-derived per-page state lives in [`super::Reveal`].
#[derive(Debug, Clone)]
pub struct PageDescriptor {
    /// 1-based, unique, contiguous; defines document order.
    pub number: u32,
    pub kind: PageKind,
    pub title: String,
    /// `None` when the asset was not found; the artboard then renders
    /// `background_color` and the overlays stay fully interactive.
    pub background: Option<PathBuf>,
    pub background_color: Color,
    /// Paint order only; never affects semantics.
    pub overlays: Vec<Overlay>,
    /// Eager asset decoding for the first pages of the deck.
    pub priority: bool,
}

impl PageDescriptor {
    pub fn new(number: u32, kind: PageKind, title: impl Into<String>) -> Self {
        PageDescriptor {
            number,
            kind,
            title: title.into(),
            background: None,
            background_color: palette::CREAM,
            overlays: Vec::new(),
            priority: false,
        }
    }

    /// Stable jump target; the sole contract between navigation, contents
    /// hotspots and the registry.
    pub fn anchor(&self) -> String {
        format!("page-{}", self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_is_keyed_to_the_page_number() {
        let page = PageDescriptor::new(7, PageKind::Generic, "Page 7");
        assert_eq!(page.anchor(), "page-7");
        let page = PageDescriptor::new(21, PageKind::Generic, "Contact");
        assert_eq!(page.anchor(), "page-21");
    }
}
