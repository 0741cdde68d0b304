use crate::api::{FetchError, ImageSource};
use crate::interactive_ratatui::domain::models::{FetchTag, ImageItem, ImagePage, ItemId};
use crate::schemas::{ApiResponse, HitId, ImageHit};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

/// Scripted in-memory image source. Clones share the script and the call log.
#[derive(Clone, Default)]
pub struct FakeImageSource {
    responses: Arc<Mutex<HashMap<FetchTag, Result<ApiResponse, FetchError>>>>,
    calls: Arc<Mutex<Vec<FetchTag>>>,
}

impl FakeImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, query: &str, page: u32, response: ApiResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(FetchTag::new(query, page), Ok(response));
        self
    }

    pub fn with_error(self, query: &str, page: u32, error: FetchError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(FetchTag::new(query, page), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<FetchTag> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageSource for FakeImageSource {
    fn search_images(&self, query: &str, page: u32) -> Result<ApiResponse, FetchError> {
        let tag = FetchTag::new(query, page);
        self.calls.lock().unwrap().push(tag.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&tag)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Transport(format!("no scripted response for {tag}"))))
    }
}

pub fn hit(id: u64) -> ImageHit {
    ImageHit {
        id: HitId::Number(id),
        tags: format!("tag{id}, sample"),
        webformat_url: format!("https://img.test/{id}_640.jpg"),
        large_image_url: format!("https://img.test/{id}_1280.jpg"),
    }
}

pub fn page_of(total_hits: u64, ids: RangeInclusive<u64>) -> ApiResponse {
    ApiResponse {
        total: total_hits,
        total_hits,
        hits: ids.map(hit).collect(),
        status: None,
        message: None,
    }
}

pub fn item(id: u64) -> ImageItem {
    ImageItem {
        id: ItemId(id),
        tags: format!("tag{id}, sample"),
        webformat_url: format!("https://img.test/{id}_640.jpg"),
        large_image_url: format!("https://img.test/{id}_1280.jpg"),
    }
}

pub fn image_page(total_hits: u64, ids: RangeInclusive<u64>) -> ImagePage {
    ImagePage {
        total_hits,
        items: ids.map(item).collect(),
    }
}
