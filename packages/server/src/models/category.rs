use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::entity::category;
use crate::error::AppError;

use super::shared::validate_catalog_text;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name, 3-100 characters.
    pub category: String,
    /// Category description, 30-500 characters.
    pub description: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryResponse {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(rename = "category")]
    pub name: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Projection returned by the category listing: id and name only.
#[derive(Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct CategorySummary {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(rename = "category")]
    pub name: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteCategoryResponse {
    #[schema(example = "Category deleted")]
    pub message: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn validate_create_category(req: &CreateCategoryRequest) -> Result<(), AppError> {
    validate_catalog_text(&req.category, "Category name", 3, 100)?;
    validate_catalog_text(&req.description, "Description", 30, 500)?;
    Ok(())
}
