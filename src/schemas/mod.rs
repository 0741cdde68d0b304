pub mod image_hit;

pub use image_hit::{ApiResponse, HitId, ImageHit};
