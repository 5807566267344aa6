use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{category, plant};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePlantRequest {
    pub name: String,
    pub price: f64,
    /// Image URLs, first entry is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Identifier of the owning category. Stored as given; the reference is
    /// not checked against the category store.
    pub category: i32,
    pub availability: i32,
    pub instruction: Option<Vec<String>>,
    pub benefits: Option<Vec<String>>,
}

/// Derived stock classification shown next to a plant's availability count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    HighStock,
    InStock,
    LowStock,
    Limited,
}

impl StockLevel {
    pub fn from_availability(availability: i32) -> Self {
        if availability > 100 {
            StockLevel::HighStock
        } else if availability > 50 {
            StockLevel::InStock
        } else if availability > 20 {
            StockLevel::LowStock
        } else {
            StockLevel::Limited
        }
    }
}

/// Category as embedded in a plant response. `None` when the plant's
/// reference points at a deleted category.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(rename = "category")]
    pub name: String,
    pub description: String,
}

impl From<category::Model> for CategoryRef {
    fn from(m: category::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PlantResponse {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub images: serde_json::Value,
    pub category: Option<CategoryRef>,
    pub availability: i32,
    #[serde(rename = "stockLevel")]
    pub stock_level: StockLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<serde_json::Value>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl PlantResponse {
    /// Assemble a response from a plant row and its (possibly missing)
    /// joined category.
    pub fn from_parts(plant: plant::Model, category: Option<category::Model>) -> Self {
        Self {
            id: plant.id,
            name: plant.name,
            price: plant.price,
            images: plant.images,
            category: category.map(CategoryRef::from),
            availability: plant.availability,
            stock_level: StockLevel::from_availability(plant.availability),
            instruction: plant.instruction,
            benefits: plant.benefits,
            created_at: plant.created_at,
            updated_at: plant.updated_at,
        }
    }
}

pub fn validate_create_plant(req: &CreatePlantRequest) -> Result<(), AppError> {
    let name = req.name.trim();
    if name.is_empty() || name.chars().count() > 256 {
        return Err(AppError::Validation(
            "Plant name must be 1-256 characters.".into(),
        ));
    }
    if !req.price.is_finite() || req.price < 0.0 {
        return Err(AppError::Validation(
            "Price must be a non-negative number.".into(),
        ));
    }
    if req.availability < 0 {
        return Err(AppError::Validation(
            "Availability must be a non-negative integer.".into(),
        ));
    }
    Ok(())
}
