use super::error::FetchError;
use super::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::interactive_ratatui::constants::PAGE_SIZE;
use crate::schemas::ApiResponse;
use std::time::Duration;

/// The API rejects longer search terms.
pub const MAX_QUERY_CHARS: usize = 100;

/// Source of result pages for a search term.
///
/// Implemented by [`PixabayClient`] for real traffic and by in-memory fakes in tests.
pub trait ImageSource: Send + Sync {
    fn search_images(&self, query: &str, page: u32) -> Result<ApiResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub per_page: usize,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            per_page: PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone)]
pub struct PixabayClient {
    config: ClientConfig,
    client: reqwest::blocking::Client,
}

impl PixabayClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Build the GET request for one page without sending it.
    pub fn build_request(
        &self,
        query: &str,
        page: u32,
    ) -> Result<reqwest::blocking::Request, FetchError> {
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(FetchError::InvalidRequest(format!(
                "search term longer than {MAX_QUERY_CHARS} characters"
            )));
        }
        if page == 0 {
            return Err(FetchError::InvalidRequest("page must be >= 1".to_string()));
        }

        let page = page.to_string();
        let per_page = self.config.per_page.to_string();

        let request = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", query),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
                ("image_type", "photo"),
                ("orientation", "horizontal"),
            ])
            .build()?;

        Ok(request)
    }
}

impl ImageSource for PixabayClient {
    fn search_images(&self, query: &str, page: u32) -> Result<ApiResponse, FetchError> {
        let request = self.build_request(query, page)?;
        tracing::debug!(query, page, "sending image search request");

        let response = self.client.execute(request)?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: ApiResponse = serde_json::from_str(&body)?;
        Ok(result)
    }
}
