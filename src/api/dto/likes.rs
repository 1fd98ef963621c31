//! DTOs for the likes counter endpoints.

use serde::Serialize;

/// Current like count for a slug: `{ "likes": n }`.
///
/// Returned by both the read and the increment endpoint; after an increment
/// the value is the post-increment count.
#[derive(Debug, Serialize)]
pub struct LikesResponse {
    pub likes: u64,
}
