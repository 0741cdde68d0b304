use crate::api::FetchError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Gallery,
    Modal,
    Help,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FetchStatus {
    Idle,
    Pending,
    Resolved,
    Rejected,
}

/// Numeric image identifier, unique within one result set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ItemId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseItemIdError(String);

impl fmt::Display for ParseItemIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid image id: {:?}", self.0)
    }
}

impl std::error::Error for ParseItemIdError {}

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| ParseItemIdError(s.to_string()))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageItem {
    pub id: ItemId,
    pub tags: String,
    pub webformat_url: String,
    pub large_image_url: String,
}

/// The (search term, page) pair a fetch was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FetchTag {
    pub query: String,
    pub page: u32,
}

impl FetchTag {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

impl fmt::Display for FetchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} page {}", self.query, self.page)
    }
}

/// A successfully decoded page of results.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePage {
    pub total_hits: u64,
    pub items: Vec<ImageItem>,
}

// Fetch request and response for worker communication
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub tag: FetchTag,
}

#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub tag: FetchTag,
    pub outcome: Result<ImagePage, FetchError>,
}
