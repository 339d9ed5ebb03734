//! Navigation state: the section table and everything derived from the
//! scroll position.
//!
//! Sections are static configuration binding a label to a start page and an
//! optional end page for ranges. The only mutable piece is [`NavState`],
//! owned by the app and recomputed from scroll notifications; nothing here
//! reaches back into the page registry.

use crate::deck::DeckLayout;
use tracing::debug;

/// Anchor top offsets at or below this many pixels from the viewport top
/// count as "scrolled past" for the active-section scan.
pub const ACTIVE_THRESHOLD: f32 = 200.0;

/// Past this scroll offset the header gains its solid background.
pub const HEADER_COLLAPSE_THRESHOLD: f32 = 50.0;

/// Past this scroll offset the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f32 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub page: u32,
    /// Set for sections spanning a contiguous page range.
    pub end_page: Option<u32>,
}

/// The header/rail section table. Start pages intentionally differ from the
/// contents-page hotspot table for some shared names; the two are independent
/// static configuration.
pub const SECTIONS: &[Section] = &[
    Section { id: "cover", label: "Cover", page: 1, end_page: None },
    Section { id: "about", label: "About", page: 2, end_page: Some(4) },
    Section { id: "contents", label: "Contents", page: 5, end_page: None },
    Section { id: "social-campaign", label: "Social Campaign", page: 6, end_page: Some(8) },
    Section { id: "pitch-pro", label: "Pitch Project", page: 11, end_page: Some(11) },
    Section { id: "one-minute-briefs", label: "One Minute Briefs", page: 15, end_page: Some(15) },
    Section { id: "case-study", label: "Case Study", page: 18, end_page: Some(18) },
    Section { id: "contact", label: "Contact", page: 21, end_page: None },
];

/// Scan sections in reverse page order and pick the last one whose start
/// anchor has crossed the threshold, i.e. the section currently occupying the
/// top of the viewport. `None` when nothing qualifies; the caller then keeps
/// its previous answer rather than resetting.
pub fn active_section(scroll_y: f32, layout: &DeckLayout) -> Option<&'static str> {
    for section in SECTIONS.iter().rev() {
        if let Some(offset) = layout.anchor_viewport_offset(section.page, scroll_y) {
            if offset <= ACTIVE_THRESHOLD {
                return Some(section.id);
            }
        }
    }
    None
}

/// Display state derived from scrolling, owned in one place with no ambient
/// globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub active: &'static str,
    pub menu_open: bool,
    pub collapsed: bool,
    pub show_scroll_top: bool,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            active: SECTIONS[0].id,
            menu_open: false,
            collapsed: false,
            show_scroll_top: false,
        }
    }
}

impl NavState {
    /// Fold one scroll notification into the display state. Fire-and-forget:
    /// each call fully supersedes the previous derivation.
    pub fn observe_scroll(&mut self, scroll_y: f32, layout: &DeckLayout) {
        self.collapsed = scroll_y > HEADER_COLLAPSE_THRESHOLD;
        self.show_scroll_top = scroll_y > SCROLL_TOP_THRESHOLD;
        if let Some(active) = active_section(scroll_y, layout) {
            if active != self.active {
                debug!(section = active, "Active section changed");
                self.active = active;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> DeckLayout {
        // 452-px artboards, 500-px spacing stride in total.
        DeckLayout::new(1000.0, 800.0, 21, 0.5)
    }

    #[test]
    fn reverse_scan_picks_the_last_qualifying_section() {
        let layout = layout();
        // Put page 8's anchor 150 px below the viewport top; page 11 is far
        // below the fold. The qualifying winner is the section starting at
        // page 6, not page 11.
        let scroll = layout.page_top(8).unwrap() - 150.0;
        assert!(layout.anchor_viewport_offset(8, scroll).unwrap() <= ACTIVE_THRESHOLD);
        assert!(layout.anchor_viewport_offset(11, scroll).unwrap() > ACTIVE_THRESHOLD);
        assert_eq!(active_section(scroll, &layout), Some("social-campaign"));
    }

    #[test]
    fn nothing_qualifying_retains_the_previous_section() {
        let mut nav = NavState::default();
        let layout = layout();
        nav.observe_scroll(layout.page_top(11).unwrap(), &layout);
        assert_eq!(nav.active, "pitch-pro");
        // A layout with no reachable anchors (empty document) qualifies
        // nothing; the previous answer must stick.
        let empty = DeckLayout::new(1000.0, 800.0, 0, 0.5);
        nav.observe_scroll(0.0, &empty);
        assert_eq!(nav.active, "pitch-pro");
    }

    #[test]
    fn at_the_top_the_cover_section_is_active() {
        let layout = layout();
        assert_eq!(active_section(0.0, &layout), Some("cover"));
    }

    #[test]
    fn header_collapses_strictly_past_fifty() {
        let mut nav = NavState::default();
        let layout = layout();
        nav.observe_scroll(50.0, &layout);
        assert!(!nav.collapsed);
        nav.observe_scroll(51.0, &layout);
        assert!(nav.collapsed);
    }

    #[test]
    fn scroll_top_control_appears_strictly_past_five_hundred() {
        let mut nav = NavState::default();
        let layout = layout();
        nav.observe_scroll(500.0, &layout);
        assert!(!nav.show_scroll_top);
        nav.observe_scroll(501.0, &layout);
        assert!(nav.show_scroll_top);
    }

    #[test]
    fn section_table_pages_are_ascending_and_ranges_are_well_formed() {
        let mut previous = 0;
        for section in SECTIONS {
            assert!(section.page > previous);
            previous = section.page;
            if let Some(end) = section.end_page {
                assert!(end >= section.page);
            }
        }
    }
}
