//! DTOs for the views counter endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the views read endpoint.
///
/// `slug` is optional at the deserialization layer so the handler can reply
/// with the contract's own 400 body instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct ViewsQuery {
    pub slug: Option<String>,
}

/// Current view count for a slug: `{ "slug": s, "views": n }`.
///
/// On the increment path `slug` is the trimmed value the count was stored
/// under.
#[derive(Debug, Serialize)]
pub struct ViewsResponse {
    pub slug: String,
    pub views: u64,
}
