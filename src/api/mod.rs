pub mod client;
pub mod error;

pub use client::{ClientConfig, ImageSource, PixabayClient};
pub use error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
