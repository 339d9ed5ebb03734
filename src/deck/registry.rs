//! Page registry: turns a total page count and the kind table into the
//! ordered list of page descriptors.
//!
//! Lookup is by exact page number; section ranges are a navigation concern
//! and never apply here. For a fixed count and assets directory the generated
//! sequence is identical across runs.

use super::overlay::{FontChoice, Hotspot, LinkTarget, Overlay, PercentRect, TextAlign, TextOverlay};
use super::page::{PageDescriptor, PageKind};
use crate::assets;
use crate::theme::palette;
use std::path::Path;
use tracing::warn;

/// Pages at or below this number decode their backgrounds eagerly.
const PRIORITY_PAGES: u32 = 3;

/// Display titles per page number. Pages beyond the table fall back to
/// `Page <n>`.
const PAGE_TITLES: &[(u32, &str)] = &[
    (1, "Cover - Portfolio by Miti Karia"),
    (2, "Photo - Miti Karia"),
    (3, "Toolkit"),
    (4, "Brief Resume"),
    (5, "Table of Contents"),
    (6, "Social Campaign - Overview"),
    (7, "Social Campaign - Design"),
    (8, "Social Campaign - Results"),
    (9, "Pitch Project - Overview"),
    (10, "Pitch Project - Design"),
    (11, "Pitch Project - Results"),
    (12, "One Minute Briefs - Overview"),
    (13, "One Minute Briefs - Research"),
    (14, "One Minute Briefs - Design"),
    (15, "One Minute Briefs - Results"),
    (16, "Case Study - Overview"),
    (17, "Case Study - Design"),
    (18, "Case Study - Results"),
    (19, "Additional Work"),
    (20, "Additional Work - Continued"),
    (21, "Contact & Thank You"),
];

/// Table-of-contents hotspots on page 5, written as raw anchor hrefs.
/// Deliberately its own table: the navigation sections use slightly different
/// start pages for some of the same names, and the two are independent static
/// configuration.
const CONTENTS_LINKS: &[(&str, &str, f32)] = &[
    ("Social Campaign", "#page-6", 30.0),
    ("Pitch Project", "#page-11", 40.0),
    ("One Minute Briefs", "#page-12", 50.0),
    ("Case Study", "#page-16", 60.0),
    ("Contact", "#page-21", 70.0),
];

/// Exact-match kind lookup.
pub fn kind_for(number: u32) -> PageKind {
    match number {
        1 => PageKind::Cover,
        2 => PageKind::Photo,
        3 => PageKind::Toolkit,
        4 => PageKind::BriefResume,
        5 => PageKind::Contents,
        _ => PageKind::Generic,
    }
}

pub fn title_for(number: u32) -> String {
    PAGE_TITLES
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| format!("Page {number}"))
}

/// Build the ordered page sequence `1..=total`.
pub fn generate(total: u32, assets_dir: &Path) -> Vec<PageDescriptor> {
    (1..=total)
        .map(|number| match kind_for(number) {
            PageKind::Cover => cover_page(assets_dir),
            PageKind::Photo => heading_page(2, PageKind::Photo, assets_dir),
            PageKind::Toolkit => heading_page(3, PageKind::Toolkit, assets_dir),
            PageKind::BriefResume => heading_page(4, PageKind::BriefResume, assets_dir),
            PageKind::Contents => contents_page(assets_dir),
            PageKind::Generic => generic_page(number, assets_dir),
        })
        .collect()
}

fn with_background(mut page: PageDescriptor, assets_dir: &Path) -> PageDescriptor {
    let path = assets::page_image_path(assets_dir, page.number);
    // A missing asset degrades to the background color, never an error.
    page.background = path.exists().then_some(path);
    if page.background.is_none() {
        // Without the artwork, invisible-ink text is the only content left;
        // give it visible ink so the page does not render blank.
        for overlay in &mut page.overlays {
            if let Overlay::Text(text) = overlay {
                text.color.get_or_insert(palette::DARK);
            }
        }
    }
    page
}

fn cover_page(assets_dir: &Path) -> PageDescriptor {
    let mut page = PageDescriptor::new(1, PageKind::Cover, title_for(1));
    page.priority = true;
    page.overlays = vec![
        Overlay::Text(
            TextOverlay::new("Portfolio by Miti Karia", 8.0, 4.0, 60.0, 2.0)
                .font(FontChoice::Display)
                .weight(700),
        ),
        Overlay::Hotspot(Hotspot::new(
            PercentRect::new(8.0, 8.0, 24.0, 5.0),
            LinkTarget::Mailto("mitikaria1999@gmail.com".to_string()),
            "Email: mitikaria1999@gmail.com",
        )),
        Overlay::Hotspot(Hotspot::new(
            PercentRect::new(8.0, 15.0, 10.0, 5.0),
            LinkTarget::External("https://linkedin.com/in/mitikaria".to_string()),
            "LinkedIn profile",
        )),
    ];
    with_background(page, assets_dir)
}

/// Pages 2-4 carry an invisible heading for selectability; the resume page
/// additionally exposes its contact line as a live mail link.
fn heading_page(number: u32, kind: PageKind, assets_dir: &Path) -> PageDescriptor {
    let mut page = PageDescriptor::new(number, kind, title_for(number));
    page.priority = number <= PRIORITY_PAGES;
    page.overlays = vec![Overlay::Text(
        TextOverlay::new(title_for(number), 8.0, 4.0, 60.0, 2.0).weight(600),
    )];
    if kind == PageKind::BriefResume {
        page.overlays.push(Overlay::Text(
            TextOverlay::new("mitikaria1999@gmail.com", 8.0, 90.0, 40.0, 1.6)
                .font(FontChoice::Mono)
                .link(LinkTarget::Mailto("mitikaria1999@gmail.com".to_string())),
        ));
    }
    with_background(page, assets_dir)
}

fn contents_page(assets_dir: &Path) -> PageDescriptor {
    let mut page = PageDescriptor::new(5, PageKind::Contents, title_for(5));
    page.overlays = vec![Overlay::Text(
        TextOverlay::new(title_for(5), 10.0, 12.0, 80.0, 3.0)
            .font(FontChoice::Display)
            .align(TextAlign::Center),
    )];
    for (label, href, top) in CONTENTS_LINKS {
        let Some(target) = LinkTarget::parse(href) else {
            warn!(label, href, "Skipping contents entry with a malformed href");
            continue;
        };
        page.overlays.push(Overlay::Hotspot(Hotspot::new(
            PercentRect::new(10.0, *top, 80.0, 8.0),
            target,
            format!("Go to {label}"),
        )));
    }
    with_background(page, assets_dir)
}

fn generic_page(number: u32, assets_dir: &Path) -> PageDescriptor {
    let mut page = PageDescriptor::new(number, PageKind::Generic, title_for(number));
    page.priority = number <= PRIORITY_PAGES;
    page.overlays = vec![Overlay::Text(TextOverlay::new(
        title_for(number),
        8.0,
        4.0,
        60.0,
        2.0,
    ))];
    with_background(page, assets_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fake_assets() -> PathBuf {
        PathBuf::from("/nonexistent/foliodeck-test-assets")
    }

    #[test]
    fn generates_one_page_per_number_in_ascending_order() {
        let pages = generate(21, &fake_assets());
        assert_eq!(pages.len(), 21);
        for (idx, page) in pages.iter().enumerate() {
            assert_eq!(page.number, idx as u32 + 1);
        }
    }

    #[test]
    fn respects_an_overridden_total() {
        assert_eq!(generate(12, &fake_assets()).len(), 12);
        assert_eq!(generate(1, &fake_assets()).len(), 1);
    }

    #[test]
    fn named_kinds_cover_exactly_the_first_five_pages() {
        let pages = generate(21, &fake_assets());
        assert_eq!(pages[0].kind, PageKind::Cover);
        assert_eq!(pages[1].kind, PageKind::Photo);
        assert_eq!(pages[2].kind, PageKind::Toolkit);
        assert_eq!(pages[3].kind, PageKind::BriefResume);
        assert_eq!(pages[4].kind, PageKind::Contents);
        assert!(pages[5..].iter().all(|p| p.kind == PageKind::Generic));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate(21, &fake_assets());
        let second = generate(21, &fake_assets());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.number, b.number);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.title, b.title);
            assert_eq!(a.overlays, b.overlays);
        }
    }

    #[test]
    fn only_the_first_pages_are_priority() {
        let pages = generate(21, &fake_assets());
        assert!(pages[0].priority);
        assert!(pages[1].priority);
        assert!(pages[2].priority);
        assert!(pages[6..].iter().all(|p| !p.priority));
    }

    #[test]
    fn missing_assets_fall_back_to_the_background_color() {
        let pages = generate(21, &fake_assets());
        assert!(pages.iter().all(|p| p.background.is_none()));
        // Overlays survive the degradation.
        assert!(!pages[0].overlays.is_empty());
    }

    #[test]
    fn missing_assets_make_the_heading_ink_visible() {
        let pages = generate(21, &fake_assets());
        for page in &pages {
            for overlay in &page.overlays {
                if let Overlay::Text(text) = overlay {
                    assert!(text.color.is_some());
                }
            }
        }
    }

    #[test]
    fn titles_past_the_table_use_the_generic_fallback() {
        assert_eq!(title_for(21), "Contact & Thank You");
        assert_eq!(title_for(22), "Page 22");
    }

    #[test]
    fn contents_hotspots_target_their_pages() {
        let pages = generate(21, &fake_assets());
        let targets: Vec<u32> = pages[4]
            .overlays
            .iter()
            .filter_map(|overlay| match overlay {
                Overlay::Hotspot(hotspot) => match hotspot.target {
                    LinkTarget::Page(n) => Some(n),
                    _ => None,
                },
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec![6, 11, 12, 16, 21]);
    }
}
