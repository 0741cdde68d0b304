pub mod api;
pub mod interactive_ratatui;
pub mod logging;
pub mod schemas;

use std::path::PathBuf;
use std::time::Duration;

/// Options for interactive mode
#[derive(Debug, Clone)]
pub struct GalleryOptions {
    pub initial_query: Option<String>,
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            initial_query: None,
            api_key: String::new(),
            base_url: api::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
            log_file: None,
        }
    }
}

impl GalleryOptions {
    /// Where logs go: `log_file` when set, otherwise the per-user cache location.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(logging::default_log_path)
    }
}

pub use api::{ClientConfig, FetchError, ImageSource, PixabayClient};
pub use interactive_ratatui::InteractiveGallery;
pub use interactive_ratatui::domain::models::{ImageItem, ItemId};
pub use schemas::{ApiResponse, ImageHit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_defaults_to_cache_location() {
        let options = GalleryOptions::default();
        assert_eq!(options.log_path(), logging::default_log_path());
    }

    #[test]
    fn test_log_path_uses_configured_file() {
        let options = GalleryOptions {
            log_file: Some(PathBuf::from("/tmp/pixgal-test.log")),
            ..GalleryOptions::default()
        };
        assert_eq!(options.log_path(), PathBuf::from("/tmp/pixgal-test.log"));
    }
}
