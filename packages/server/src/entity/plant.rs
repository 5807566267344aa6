use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub price: f64, // in rupees
    /// Image URLs stored as a JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub images: serde_json::Value,
    /// References category.id. Not a foreign key: deleting a category leaves
    /// its plants pointing at the old id.
    pub category_id: i32,
    /// Units in stock. Never negative.
    pub availability: i32,
    /// Care instructions stored as a JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub instruction: Option<serde_json::Value>,
    #[sea_orm(column_type = "JsonBinary")]
    pub benefits: Option<serde_json::Value>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

/// Join definition for resolving a plant's category reference.
///
/// Built ad hoc because the reference carries no relation in the schema;
/// read paths LEFT JOIN through this so dangling references surface as a
/// missing category rather than an error.
pub fn category_relation() -> RelationDef {
    Entity::belongs_to(super::category::Entity)
        .from(Column::CategoryId)
        .to(super::category::Column::Id)
        .into()
}
