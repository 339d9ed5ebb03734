//! Overlay descriptors: positioned text and interactive hotspots.
//!
//! All positions are percentages of the enclosing artboard, never absolute
//! pixels. Text overlays default to invisible ink (transparent color) so the
//! words stay selectable over the background image without repainting it.

use iced::{Color, Rectangle, Size};

/// A rectangle in percent-of-artboard coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PercentRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        PercentRect { x, y, width, height }
    }

    /// Map to pixels within an artboard of the given size.
    pub fn resolve(&self, artboard: Size) -> Rectangle {
        Rectangle {
            x: self.x / 100.0 * artboard.width,
            y: self.y / 100.0 * artboard.height,
            width: self.width / 100.0 * artboard.width,
            height: self.height / 100.0 * artboard.height,
        }
    }
}

/// The closed set of typefaces overlays may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontChoice {
    Display,
    #[default]
    Sans,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Where an overlay points when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Smooth in-document scroll to the `page-<n>` anchor.
    Page(u32),
    /// Absolute URL, handed to the OS with no back-reference to the document.
    External(String),
    Mailto(String),
}

impl LinkTarget {
    /// Classify a raw link string the way the page data writes them:
    /// absolute URLs, `mailto:` addresses, and `#page-<n>` anchors.
    pub fn parse(raw: &str) -> Option<LinkTarget> {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Some(LinkTarget::External(raw.to_string()));
        }
        if let Some(address) = raw.strip_prefix("mailto:") {
            return Some(LinkTarget::Mailto(address.to_string()));
        }
        let number = raw.strip_prefix("#page-")?;
        number.parse().ok().map(LinkTarget::Page)
    }

    /// True for targets that leave the document (external URL or mail).
    pub fn leaves_document(&self) -> bool {
        !matches!(self, LinkTarget::Page(_))
    }
}

/// Selectable text placed over the background image.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    pub text: String,
    /// Percent from the left edge.
    pub x: f32,
    /// Percent from the top edge.
    pub y: f32,
    /// Percent of the artboard width.
    pub width: f32,
    /// Percent of the artboard width, resolved per measurement.
    pub font_size: f32,
    pub font: FontChoice,
    pub weight: u16,
    /// `None` renders as invisible ink over the artwork.
    pub color: Option<Color>,
    pub align: TextAlign,
    pub line_height: f32,
    /// Extra space characters inserted between glyphs.
    pub letter_spacing: u32,
    pub link: Option<LinkTarget>,
}

impl TextOverlay {
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, font_size: f32) -> Self {
        TextOverlay {
            text: text.into(),
            x,
            y,
            width,
            font_size,
            font: FontChoice::default(),
            weight: 400,
            color: None,
            align: TextAlign::default(),
            line_height: 1.4,
            letter_spacing: 0,
            link: None,
        }
    }

    pub fn font(mut self, font: FontChoice) -> Self {
        self.font = font;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn link(mut self, target: LinkTarget) -> Self {
        self.link = Some(target);
        self
    }

    /// Font size in pixels for an artboard measured at `artboard_width`.
    /// Before the first measurement the width is zero and so is the result.
    pub fn font_px(&self, artboard_width: f32) -> f32 {
        if artboard_width <= 0.0 || !artboard_width.is_finite() {
            return 0.0;
        }
        self.font_size / 100.0 * artboard_width
    }

    /// Top-left position and width in pixels.
    pub fn resolve(&self, artboard: Size) -> Rectangle {
        PercentRect::new(self.x, self.y, self.width, 0.0).resolve(artboard)
    }

    /// Text with letter spacing applied as inserted gaps.
    pub fn display_text(&self) -> String {
        if self.letter_spacing == 0 {
            return self.text.clone();
        }
        let gap = " ".repeat(self.letter_spacing as usize);
        let mut spaced = String::with_capacity(self.text.len() * 2);
        for (idx, ch) in self.text.chars().enumerate() {
            if idx > 0 {
                spaced.push_str(&gap);
            }
            spaced.push(ch);
        }
        spaced
    }
}

/// An invisible interactive region over the artwork. Rendered fully
/// transparent at rest with a faint tint on hover, so the artwork stays
/// clean while the region remains discoverable.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub region: PercentRect,
    pub target: LinkTarget,
    /// Accessible name, distinct from any visible content.
    pub label: String,
}

impl Hotspot {
    pub fn new(region: PercentRect, target: LinkTarget, label: impl Into<String>) -> Self {
        Hotspot {
            region,
            target,
            label: label.into(),
        }
    }
}

/// One positioned element of an artboard's content layer. Order within a
/// page affects paint order only.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Text(TextOverlay),
    Hotspot(Hotspot),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rect_maps_to_artboard_pixels() {
        let rect = PercentRect::new(8.0, 8.0, 24.0, 5.0);
        let resolved = rect.resolve(Size::new(1000.0, 500.0));
        assert!((resolved.x - 80.0).abs() < f32::EPSILON);
        assert!((resolved.y - 40.0).abs() < f32::EPSILON);
        assert!((resolved.width - 240.0).abs() < f32::EPSILON);
        assert!((resolved.height - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn text_overlay_resolution_matches_percent_mapping() {
        let overlay = TextOverlay::new("hello", 8.0, 8.0, 24.0, 2.4);
        let resolved = overlay.resolve(Size::new(1000.0, 1000.0));
        assert!((resolved.x - 80.0).abs() < f32::EPSILON);
        assert!((resolved.width - 240.0).abs() < f32::EPSILON);
    }

    #[test]
    fn font_px_scales_with_artboard_width() {
        let overlay = TextOverlay::new("hello", 0.0, 0.0, 50.0, 2.5);
        assert!((overlay.font_px(1000.0) - 25.0).abs() < f32::EPSILON);
        assert!((overlay.font_px(400.0) - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn font_px_is_zero_before_first_measurement() {
        let overlay = TextOverlay::new("hello", 0.0, 0.0, 50.0, 2.5);
        assert_eq!(overlay.font_px(0.0), 0.0);
        assert_eq!(overlay.font_px(-1.0), 0.0);
        assert_eq!(overlay.font_px(f32::NAN), 0.0);
    }

    #[test]
    fn link_targets_classify_like_the_page_data() {
        assert_eq!(
            LinkTarget::parse("https://linkedin.com/in/mitikaria"),
            Some(LinkTarget::External(
                "https://linkedin.com/in/mitikaria".to_string()
            ))
        );
        assert_eq!(
            LinkTarget::parse("mailto:mitikaria1999@gmail.com"),
            Some(LinkTarget::Mailto("mitikaria1999@gmail.com".to_string()))
        );
        assert_eq!(LinkTarget::parse("#page-11"), Some(LinkTarget::Page(11)));
        assert_eq!(LinkTarget::parse("#section-11"), None);
        assert_eq!(LinkTarget::parse("page-11"), None);
    }

    #[test]
    fn letter_spacing_inserts_gaps_between_glyphs() {
        let mut overlay = TextOverlay::new("abc", 0.0, 0.0, 10.0, 1.0);
        assert_eq!(overlay.display_text(), "abc");
        overlay.letter_spacing = 1;
        assert_eq!(overlay.display_text(), "a b c");
        overlay.letter_spacing = 2;
        assert_eq!(overlay.display_text(), "a  b  c");
    }

    #[test]
    fn only_page_targets_stay_in_document() {
        assert!(!LinkTarget::Page(5).leaves_document());
        assert!(LinkTarget::External("https://example.com".into()).leaves_document());
        assert!(LinkTarget::Mailto("a@b.c".into()).leaves_document());
    }
}
