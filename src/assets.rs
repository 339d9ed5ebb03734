//! Page asset addressing.
//!
//! Backgrounds follow one deterministic naming convention: a zero-padded
//! two-digit page number inside a fixed path template under the assets root.

use std::path::{Path, PathBuf};
use tracing::debug;

/// `<assets>/pages/page-NN.png` for page `number`.
pub fn page_image_path(assets_dir: &Path, number: u32) -> PathBuf {
    assets_dir.join("pages").join(format!("page-{number:02}.png"))
}

/// Height-over-width ratio of an image asset, read from its header. `None`
/// on any failure; the caller falls back to the default deck ratio.
pub fn probe_aspect(path: &Path) -> Option<f32> {
    match image::image_dimensions(path) {
        Ok((width, height)) if width > 0 => {
            let aspect = height as f32 / width as f32;
            debug!(path = %path.display(), aspect, "Probed artboard aspect ratio");
            Some(aspect)
        }
        Ok(_) => None,
        Err(err) => {
            debug!(path = %path.display(), %err, "Could not probe artboard aspect ratio");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_paths_are_zero_padded_two_digits() {
        let dir = PathBuf::from("assets/portfolio");
        assert_eq!(
            page_image_path(&dir, 1),
            PathBuf::from("assets/portfolio/pages/page-01.png")
        );
        assert_eq!(
            page_image_path(&dir, 21),
            PathBuf::from("assets/portfolio/pages/page-21.png")
        );
    }

    #[test]
    fn probing_a_missing_asset_yields_none() {
        assert!(probe_aspect(Path::new("/nonexistent/page-01.png")).is_none());
    }
}
