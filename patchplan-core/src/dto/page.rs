//! Pagination request and response envelopes

use serde::{Deserialize, Serialize};

/// Page size requested on list endpoints so results arrive in one page
pub const OVERSIZED_PAGE: u32 = 10_000;

/// Request body asking for an oversized single page
#[derive(Debug, Clone, Serialize)]
pub struct PageParams {
    pub per_page: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            per_page: OVERSIZED_PAGE,
        }
    }
}

/// Request body combining a search filter with an oversized page
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    pub search: String,
    pub per_page: u32,
}

impl SearchParams {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            per_page: OVERSIZED_PAGE,
        }
    }
}

/// List response envelope
///
/// `subtotal` is the server's count of matching records; when it exceeds the
/// number of results actually returned, the page was capped.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub subtotal: Option<u64>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Matching records beyond this page, when the response carries enough
    /// to tell
    pub fn truncated_by(&self) -> Option<u64> {
        let subtotal = self.subtotal?;
        let returned = self.results.len() as u64;
        (subtotal > returned).then(|| subtotal - returned)
    }
}
