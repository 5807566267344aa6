use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{category, plant};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::plant::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Plants",
    operation_id = "getPlants",
    summary = "List all plants",
    description = "Returns every plant in the catalog with its category embedded.",
    responses(
        (status = 200, description = "List of plants", body = Vec<PlantResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_plants(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlantResponse>>, AppError> {
    let rows = plant::Entity::find()
        .join(JoinType::LeftJoin, plant::category_relation())
        .select_also(category::Entity)
        .order_by_asc(plant::Column::Id)
        .all(&state.db)
        .await?;

    let plants = rows
        .into_iter()
        .map(|(p, c)| PlantResponse::from_parts(p, c))
        .collect();

    Ok(Json(plants))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Plants",
    operation_id = "getPlantById",
    summary = "Get a plant by ID",
    params(("id" = i32, Path, description = "Plant ID")),
    responses(
        (status = 200, description = "Plant details", body = PlantResponse),
        (status = 404, description = "Plant not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlantResponse>, AppError> {
    let (model, cat) = plant::Entity::find_by_id(id)
        .join(JoinType::LeftJoin, plant::category_relation())
        .select_also(category::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Plant not found".into()))?;

    Ok(Json(PlantResponse::from_parts(model, cat)))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Plants",
    operation_id = "addPlant",
    summary = "Create a new plant",
    description = "Creates a plant. The category reference is stored as given and not checked against the category store.",
    request_body = CreatePlantRequest,
    responses(
        (status = 201, description = "Plant created", body = PlantResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_plant(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePlantRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_plant(&payload)?;

    let now = chrono::Utc::now();
    let new_plant = plant::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        price: Set(payload.price),
        images: Set(serde_json::Value::from(payload.images)),
        category_id: Set(payload.category),
        availability: Set(payload.availability),
        instruction: Set(payload.instruction.map(serde_json::Value::from)),
        benefits: Set(payload.benefits.map(serde_json::Value::from)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_plant.insert(&state.db).await?;
    let cat = category::Entity::find_by_id(model.category_id)
        .one(&state.db)
        .await?;

    Ok((StatusCode::CREATED, Json(PlantResponse::from_parts(model, cat))))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Plants",
    operation_id = "deletePlant",
    summary = "Delete a plant by ID",
    params(("id" = i32, Path, description = "Plant ID")),
    responses(
        (status = 204, description = "Plant deleted"),
        (status = 404, description = "Plant not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_plant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = plant::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Plant not found".into()));
    }

    Ok(StatusCode::NO_CONTENT)
}
