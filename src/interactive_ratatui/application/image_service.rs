use crate::api::{FetchError, ImageSource};
use crate::interactive_ratatui::domain::models::{
    FetchRequest, FetchResponse, ImageItem, ImagePage, ItemId,
};
use crate::schemas::{ApiResponse, HitId, ImageHit};
use std::sync::Arc;

/// Turns raw API pages into gallery items.
pub struct ImageService {
    source: Arc<dyn ImageSource>,
}

impl ImageService {
    pub fn new(source: Arc<dyn ImageSource>) -> Self {
        Self { source }
    }

    pub fn fetch(&self, request: FetchRequest) -> FetchResponse {
        let outcome = self.fetch_page(&request.tag.query, request.tag.page);
        FetchResponse {
            tag: request.tag,
            outcome,
        }
    }

    fn fetch_page(&self, query: &str, page: u32) -> Result<ImagePage, FetchError> {
        let response = self.source.search_images(query, page)?;
        into_page(response)
    }
}

fn into_page(response: ApiResponse) -> Result<ImagePage, FetchError> {
    // The API can answer 200 with an error-shaped body
    if response.is_error() {
        return Err(FetchError::Api(
            response
                .message
                .unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    let items = response
        .hits
        .into_iter()
        .map(into_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ImagePage {
        total_hits: response.total_hits,
        items,
    })
}

fn into_item(hit: ImageHit) -> Result<ImageItem, FetchError> {
    let id = match hit.id {
        HitId::Number(n) => ItemId(n),
        HitId::Text(text) => text
            .parse::<ItemId>()
            .map_err(|e| FetchError::Decode(e.to_string()))?,
    };

    Ok(ImageItem {
        id,
        tags: hit.tags,
        webformat_url: hit.webformat_url,
        large_image_url: hit.large_image_url,
    })
}
