//! Input validation.
//!
//! Two entry points with different strictness:
//! - `is_valid_url`: the URL must already be absolute http/https (live feedback)
//! - `normalize_url`: lenient input, canonical output used as request body and cache key

mod normalize;

pub use normalize::{hostname_of, is_valid_url, normalize_url};
