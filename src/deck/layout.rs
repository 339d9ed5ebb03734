//! Artboard geometry shared by the view and the scroll handlers.
//!
//! All anchor math works in content coordinates: y grows downward from the
//! top of the scrollable document, and the fixed header floats above it.

/// Height of the fixed header floating above the deck.
pub const HEADER_HEIGHT: f32 = 80.0;

/// Vertical gap between consecutive artboards.
pub const PAGE_SPACING: f32 = 48.0;

/// Height reserved for the footer at the end of the document.
pub const FOOTER_HEIGHT: f32 = 360.0;

/// Side gutters around the artboard column.
const GUTTER: f32 = 48.0;

/// Artboards never grow wider than this, matching the source artwork.
const MAX_ARTBOARD_WIDTH: f32 = 1200.0;

/// Landscape deck ratio (height / width), used when the cover asset cannot
/// be probed.
pub const DEFAULT_ASPECT: f32 = 9.0 / 16.0;

/// Resolved geometry for one viewport size and page count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckLayout {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub artboard_width: f32,
    pub artboard_height: f32,
    pub total_pages: u32,
}

impl DeckLayout {
    /// `aspect` is artboard height over width.
    pub fn new(viewport_width: f32, viewport_height: f32, total_pages: u32, aspect: f32) -> Self {
        let usable = (viewport_width - GUTTER * 2.0).max(1.0);
        let artboard_width = usable.min(MAX_ARTBOARD_WIDTH);
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            DEFAULT_ASPECT
        };
        DeckLayout {
            viewport_width,
            viewport_height,
            artboard_width,
            artboard_height: artboard_width * aspect,
            total_pages,
        }
    }

    /// Content-coordinate top of the `page-<n>` anchor, or `None` when the
    /// page is not part of the document.
    pub fn page_top(&self, number: u32) -> Option<f32> {
        if number == 0 || number > self.total_pages {
            return None;
        }
        let preceding = (number - 1) as f32;
        Some(HEADER_HEIGHT + PAGE_SPACING + preceding * (self.artboard_height + PAGE_SPACING))
    }

    /// Anchor top relative to the viewport top at the given scroll offset.
    pub fn anchor_viewport_offset(&self, number: u32, scroll_y: f32) -> Option<f32> {
        Some(self.page_top(number)? - scroll_y)
    }

    /// Full height of the scrollable document.
    pub fn content_height(&self) -> f32 {
        HEADER_HEIGHT
            + PAGE_SPACING
            + self.total_pages as f32 * (self.artboard_height + PAGE_SPACING)
            + FOOTER_HEIGHT
    }

    /// Whether the page's artboard overlaps the viewport shrunk inward by
    /// `margin` (a fraction of the viewport height) on both edges. This is
    /// what arms a page's entrance reveal.
    pub fn intersects_viewport(&self, number: u32, scroll_y: f32, margin: f32) -> bool {
        let Some(top) = self.page_top(number) else {
            return false;
        };
        let bottom = top + self.artboard_height;
        let inset = self.viewport_height * margin;
        let band_top = scroll_y + inset;
        let band_bottom = scroll_y + self.viewport_height - inset;
        bottom > band_top && top < band_bottom
    }

    /// Scroll offset that centers the page's artboard in the viewport,
    /// clamped to the scrollable range. `None` when the anchor is absent,
    /// in which case the caller leaves the scroll position untouched.
    pub fn centered_offset(&self, number: u32) -> Option<f32> {
        let top = self.page_top(number)?;
        let centered = top + self.artboard_height / 2.0 - self.viewport_height / 2.0;
        let max = (self.content_height() - self.viewport_height).max(0.0);
        Some(centered.clamp(0.0, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> DeckLayout {
        DeckLayout::new(1296.0, 900.0, 21, 0.5)
    }

    #[test]
    fn artboard_width_is_capped_and_guttered() {
        let narrow = DeckLayout::new(800.0, 600.0, 21, 0.5);
        assert!((narrow.artboard_width - 704.0).abs() < f32::EPSILON);
        let wide = DeckLayout::new(3000.0, 900.0, 21, 0.5);
        assert!((wide.artboard_width - 1200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn page_tops_ascend_by_one_artboard_plus_spacing() {
        let layout = layout();
        let first = layout.page_top(1).unwrap();
        let second = layout.page_top(2).unwrap();
        assert!((second - first - (layout.artboard_height + PAGE_SPACING)).abs() < 0.001);
    }

    #[test]
    fn anchors_outside_the_document_resolve_to_none() {
        let layout = layout();
        assert!(layout.page_top(0).is_none());
        assert!(layout.page_top(22).is_none());
        assert!(layout.centered_offset(99).is_none());
    }

    #[test]
    fn centered_offset_centers_the_artboard() {
        let layout = layout();
        let offset = layout.centered_offset(10).unwrap();
        let top = layout.page_top(10).unwrap();
        let center = top + layout.artboard_height / 2.0;
        assert!((offset + layout.viewport_height / 2.0 - center).abs() < 0.001);
    }

    #[test]
    fn centered_offset_clamps_at_the_document_edges() {
        let layout = layout();
        assert_eq!(layout.centered_offset(1), Some(0.0));
        let last = layout.centered_offset(21).unwrap();
        assert!(last <= layout.content_height() - layout.viewport_height);
    }

    #[test]
    fn intersection_honors_the_inward_margin() {
        let layout = layout();
        let top = layout.page_top(3).unwrap();
        // Scrolled so the page's bottom edge sits just inside the margin band.
        let scroll = top + layout.artboard_height - layout.viewport_height * 0.05 - 1.0;
        assert!(layout.intersects_viewport(3, scroll, 0.05));
        // One pixel past the band and the page no longer counts as visible.
        let scroll = top + layout.artboard_height - layout.viewport_height * 0.05 + 1.0;
        assert!(!layout.intersects_viewport(3, scroll, 0.05));
    }

    #[test]
    fn content_height_accounts_for_every_page_and_the_footer() {
        let layout = layout();
        let last_bottom = layout.page_top(21).unwrap() + layout.artboard_height;
        assert!(layout.content_height() >= last_bottom + FOOTER_HEIGHT);
    }
}
