use serde::{Deserialize, Serialize};

use super::plant::PlantResponse;
use super::shared::Pagination;

/// Maximum number of autocomplete suggestions returned, combined across
/// plants and categories.
pub const SUGGESTION_LIMIT: u64 = 7;

/// Default page size for search results.
pub const DEFAULT_PAGE_SIZE: u64 = 8;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct SuggestQuery {
    /// Substring to match against plant and category names.
    pub q: Option<String>,
}

/// A lightweight autocomplete hint tagged by its source entity type.
#[derive(Serialize, utoipa::ToSchema)]
pub struct Suggestion {
    /// `"plant"` or `"category"`.
    #[serde(rename = "type")]
    #[schema(example = "plant")]
    pub kind: &'static str,
    pub value: String,
}

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    /// Exact category id.
    pub category: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// In-stock gate. Its mere presence restricts results to
    /// availability > 0; the value is ignored.
    pub available: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Substring to match against plant and category names. Required.
    pub q: Option<String>,
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<u64>,
    /// Items per page. Defaults to 8.
    pub limit: Option<u64>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub plants: Vec<PlantResponse>,
    pub pagination: Pagination,
}
