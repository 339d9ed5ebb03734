//! The page/overlay composition model.
//!
//! A deck is an ordered run of image-backed artboards. Each artboard carries a
//! declarative list of overlays (selectable text and invisible hotspots) in
//! percentage coordinates, so the artboard can be rescaled without touching
//! overlay geometry. Everything in here is plain data plus pure geometry; the
//! `app` module owns the widgets.

mod layout;
mod overlay;
mod page;
mod registry;
mod reveal;

pub use layout::{DeckLayout, DEFAULT_ASPECT, FOOTER_HEIGHT, HEADER_HEIGHT, PAGE_SPACING};
pub use overlay::{FontChoice, Hotspot, LinkTarget, Overlay, PercentRect, TextAlign, TextOverlay};
pub use page::{PageDescriptor, PageKind};
pub use registry::{generate, kind_for, title_for};
pub use reveal::{Reveal, REVEAL_DURATION, REVEAL_MARGIN};
