use serde::Serialize;

use crate::error::AppError;

/// Pagination metadata included in search responses.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page number (1-based).
    #[schema(example = 1)]
    pub current_page: u64,
    /// Total number of pages.
    #[schema(example = 3)]
    pub total_pages: u64,
    /// Total number of matching items across all pages.
    #[schema(example = 21)]
    pub total_items: u64,
    /// Number of items per page.
    #[schema(example = 8)]
    pub items_per_page: u64,
}

/// Escape LIKE wildcard characters in a search string.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build a case-insensitive substring LIKE pattern from user text.
///
/// Wildcards in the input are escaped first so every character matches
/// literally; compare against `LOWER(column)`.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term).to_lowercase())
}

/// Characters permitted in category names and descriptions: ASCII
/// alphanumerics, underscore, whitespace, and `, . - ! ' ’`.
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || matches!(c, ',' | '.' | '-' | '!' | '\'' | '’')
}

/// Validate a catalog text field: length in `min..=max` Unicode characters,
/// allowed characters only. The value is checked as-is, without trimming.
pub fn validate_catalog_text(
    value: &str,
    field: &str,
    min: usize,
    max: usize,
) -> Result<(), AppError> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(AppError::Validation(format!(
            "{field} must be {min}-{max} characters."
        )));
    }
    if !value.chars().all(is_allowed_char) {
        return Err(AppError::Validation(format!(
            "{field} contains invalid characters."
        )));
    }
    Ok(())
}
