//! The optional deck metadata document.
//!
//! A static JSON resource may override the total page count. Every failure
//! class (unreachable source, HTTP error, malformed JSON, absent field,
//! out-of-range value) is treated identically: fall back to the default
//! count, log at debug, never surface an error, never retry.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Page count used whenever the metadata source cannot provide one.
pub const DEFAULT_TOTAL_PAGES: u32 = 21;

/// Two-digit asset naming bounds the plausible page count.
const MAX_TOTAL_PAGES: u32 = 99;

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the metadata document lives.
#[derive(Debug, Clone)]
pub enum MetadataSource {
    File(PathBuf),
    Url(String),
}

impl MetadataSource {
    /// The configured override when present, otherwise `metadata.json` next
    /// to the page assets.
    pub fn resolve(configured: Option<&str>, assets_dir: &Path) -> MetadataSource {
        match configured {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                MetadataSource::Url(raw.to_string())
            }
            Some(raw) => MetadataSource::File(PathBuf::from(raw)),
            None => MetadataSource::File(assets_dir.join("metadata.json")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct DeckMetadata {
    #[serde(default)]
    total_pages: Option<u32>,
}

/// Total page count from a raw metadata document, when it is well-formed and
/// in range.
fn parse_total_pages(raw: &str) -> Option<u32> {
    let metadata: DeckMetadata = serde_json::from_str(raw).ok()?;
    metadata
        .total_pages
        .filter(|count| (1..=MAX_TOTAL_PAGES).contains(count))
}

async fn read_source(source: &MetadataSource) -> Option<String> {
    match source {
        MetadataSource::File(path) => fs::read_to_string(path).ok(),
        MetadataSource::Url(url) => {
            let client = reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .ok()?;
            let response = client.get(url).send().await.ok()?.error_for_status().ok()?;
            response.text().await.ok()
        }
    }
}

/// Fetch the page count, falling back to [`DEFAULT_TOTAL_PAGES`]. Infallible
/// by design: a presentational deck never shows a broken state.
pub async fn fetch_total_pages(source: &MetadataSource) -> u32 {
    match read_source(source).await.as_deref().and_then(parse_total_pages) {
        Some(total) => {
            info!(total, "Metadata overrides the page count");
            total
        }
        None => {
            debug!(?source, "Using the default page configuration");
            DEFAULT_TOTAL_PAGES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_well_formed_override_is_honored() {
        assert_eq!(parse_total_pages(r#"{ "total_pages": 12 }"#), Some(12));
    }

    #[test]
    fn every_failure_class_falls_back() {
        // Malformed JSON.
        assert_eq!(parse_total_pages("not json"), None);
        // Wrong shape.
        assert_eq!(parse_total_pages(r#"[1, 2, 3]"#), None);
        assert_eq!(parse_total_pages(r#"{ "total_pages": "many" }"#), None);
        // Absent field.
        assert_eq!(parse_total_pages(r#"{}"#), None);
        // Out of range.
        assert_eq!(parse_total_pages(r#"{ "total_pages": 0 }"#), None);
        assert_eq!(parse_total_pages(r#"{ "total_pages": 100 }"#), None);
    }

    #[test]
    fn extra_fields_are_ignored() {
        assert_eq!(
            parse_total_pages(r#"{ "total_pages": 21, "generated_by": "extract_pdf_assets" }"#),
            Some(21)
        );
    }

    #[test]
    fn an_unreachable_file_source_yields_the_default() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = MetadataSource::File(PathBuf::from("/nonexistent/metadata.json"));
        assert_eq!(
            runtime.block_on(fetch_total_pages(&source)),
            DEFAULT_TOTAL_PAGES
        );
    }

    #[test]
    fn sources_resolve_by_scheme() {
        let assets = Path::new("assets/portfolio");
        assert!(matches!(
            MetadataSource::resolve(Some("https://example.com/metadata.json"), assets),
            MetadataSource::Url(_)
        ));
        assert!(matches!(
            MetadataSource::resolve(Some("conf/metadata.json"), assets),
            MetadataSource::File(_)
        ));
        match MetadataSource::resolve(None, assets) {
            MetadataSource::File(path) => {
                assert_eq!(path, PathBuf::from("assets/portfolio/metadata.json"));
            }
            MetadataSource::Url(_) => panic!("default source should be a file"),
        }
    }
}
