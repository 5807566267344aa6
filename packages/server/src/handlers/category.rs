use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::Func;
use sea_orm::*;
use tracing::instrument;

use crate::entity::category;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::category::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Categories",
    operation_id = "createCategory",
    summary = "Create a new category",
    description = "Creates a new plant category. Names are unique under case-insensitive comparison.",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Category already exists (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(category = %payload.category))]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_category(&payload)?;

    // One existence check, one insert; nothing spans the two. A concurrent
    // duplicate that slips past the check trips the unique index on
    // LOWER(name) at insert time.
    let existing = category::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(category::Column::Name)))
                .eq(payload.category.to_lowercase()),
        )
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Category already exists.".into()));
    }

    let now = chrono::Utc::now();
    let new_category = category::ActiveModel {
        name: Set(payload.category),
        description: Set(payload.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_category
        .insert(&state.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                tracing::debug!("Category create race: unique constraint caught on insert");
                AppError::Conflict("Category already exists.".into())
            }
            _ => AppError::from(e),
        })?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(model))))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Categories",
    operation_id = "deleteCategory",
    summary = "Delete a category by ID",
    description = "Deletes a category. Plants referencing it are left untouched; their category reference dangles.",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = DeleteCategoryResponse),
        (status = 404, description = "Category not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteCategoryResponse>, AppError> {
    let result = category::Entity::delete_by_id(id).exec(&state.db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Category not found".into()));
    }

    Ok(Json(DeleteCategoryResponse {
        message: "Category deleted".into(),
    }))
}
