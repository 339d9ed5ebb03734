use super::models::AppConfig;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from a TOML file, falling back to defaults when the
/// file is absent or malformed. The viewer must always be able to launch.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(raw) => parse_config(&raw),
        Err(err) => {
            debug!(path = %path.display(), %err, "No config file; using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(raw: &str) -> AppConfig {
    match toml::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "Malformed config; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_input_yields_defaults() {
        let config = parse_config("");
        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.assets_dir, "assets/portfolio");
        assert!(config.metadata_source.is_none());
        assert!(!config.reduced_motion);
    }

    #[test]
    fn malformed_input_yields_defaults() {
        let config = parse_config("theme = [not toml");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_input_keeps_unspecified_defaults() {
        let config = parse_config(
            "theme = \"night\"\nmetadata_source = \"conf/metadata.json\"\nreduced_motion = true\n",
        );
        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.metadata_source.as_deref(), Some("conf/metadata.json"));
        assert!(config.reduced_motion);
        assert_eq!(config.window_width, 1280.0);
    }
}
