use serde::{Deserialize, Serialize};

/// One page of results as returned by the image-search API.
///
/// Every field is defaulted: an error payload (`{"status": "error", "message": ...}`)
/// carries neither `totalHits` nor `hits` and must still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<ImageHit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

// Hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHit {
    pub id: HitId,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
}

/// Identifiers arrive as JSON numbers from the API, but proxies and fixtures
/// sometimes stringify them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HitId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for HitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HitId::Number(n) => write!(f, "{n}"),
            HitId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_results_page() {
        let json = r#"{
            "total": 4692,
            "totalHits": 500,
            "hits": [
                {
                    "id": 195893,
                    "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                    "type": "photo",
                    "tags": "blossom, bloom, flower",
                    "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                    "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                    "views": 7671
                }
            ]
        }"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_hits, 500);
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].id, HitId::Number(195893));
        assert_eq!(response.hits[0].tags, "blossom, bloom, flower");
        assert!(response.hits[0].large_image_url.ends_with("_1280.jpg"));
        assert!(!response.is_error());
    }

    #[test]
    fn test_decode_error_payload() {
        let json = r#"{"status": "error", "message": "Invalid API key"}"#;

        let response: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_error());
        assert_eq!(response.message.as_deref(), Some("Invalid API key"));
        assert_eq!(response.total_hits, 0);
        assert!(response.hits.is_empty());
    }

    #[test]
    fn test_decode_stringified_id() {
        let json = r#"{"id": "42", "tags": "", "webformatURL": "w", "largeImageURL": "l"}"#;

        let hit: ImageHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.id, HitId::Text("42".to_string()));
        assert_eq!(hit.id.to_string(), "42");
    }
}
