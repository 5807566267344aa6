use axum::Json;
use axum::extract::{Query, State};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Func, LikeExpr};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{category, plant};
use crate::error::{AppError, ErrorBody};
use crate::models::category::CategorySummary;
use crate::models::common::*;
use crate::models::plant::PlantResponse;
use crate::models::shared::{Pagination, contains_pattern};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Catalog",
    operation_id = "getAllCategories",
    summary = "List all categories",
    description = "Returns every category projected to id and name only.",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategorySummary>),
    ),
)]
#[instrument(skip(state))]
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    let categories = category::Entity::find()
        .select_only()
        .column(category::Column::Id)
        .column(category::Column::Name)
        .order_by_asc(category::Column::Id)
        .into_model::<CategorySummary>()
        .all(&state.db)
        .await?;

    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/suggest",
    tag = "Catalog",
    operation_id = "getSuggestions",
    summary = "Autocomplete suggestions",
    description = "Returns up to 7 plant and category names containing the query as a case-insensitive substring. Plant matches come first and can crowd out category matches entirely.",
    params(SuggestQuery),
    responses(
        (status = 200, description = "Suggestions, empty if no query given", body = Vec<Suggestion>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<Json<Vec<Suggestion>>, AppError> {
    let q = query.q.unwrap_or_default();
    if q.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let pattern = contains_pattern(&q);

    let plant_names: Vec<String> = plant::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(plant::Column::Name)))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
        .select_only()
        .column(plant::Column::Name)
        .order_by_asc(plant::Column::Id)
        .limit(SUGGESTION_LIMIT)
        .into_tuple::<String>()
        .all(&state.db)
        .await?;

    let category_names: Vec<String> = category::Entity::find()
        .filter(
            Expr::expr(Func::lower(Expr::col(category::Column::Name)))
                .like(LikeExpr::new(pattern).escape('\\')),
        )
        .select_only()
        .column(category::Column::Name)
        .order_by_asc(category::Column::Id)
        .limit(SUGGESTION_LIMIT)
        .into_tuple::<String>()
        .all(&state.db)
        .await?;

    let suggestions: Vec<Suggestion> = plant_names
        .into_iter()
        .map(|value| Suggestion {
            kind: "plant",
            value,
        })
        .chain(category_names.into_iter().map(|value| Suggestion {
            kind: "category",
            value,
        }))
        .take(SUGGESTION_LIMIT as usize)
        .collect();

    Ok(Json(suggestions))
}

#[utoipa::path(
    get,
    path = "/filter",
    tag = "Catalog",
    operation_id = "filterPlants",
    summary = "Filter plants",
    description = "Returns all plants matching the given filters. The `available` filter applies whenever the key is present, regardless of its value.",
    params(FilterQuery),
    responses(
        (status = 200, description = "Matching plants", body = Vec<PlantResponse>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn filter_plants(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<Vec<PlantResponse>>, AppError> {
    let mut select = plant::Entity::find();

    if let Some(category_id) = query.category {
        select = select.filter(plant::Column::CategoryId.eq(category_id));
    }
    if let Some(min_price) = query.min_price {
        select = select.filter(plant::Column::Price.gte(min_price));
    }
    if let Some(max_price) = query.max_price {
        select = select.filter(plant::Column::Price.lte(max_price));
    }
    // Presence of the key selects in-stock plants; the value is ignored.
    if query.available.is_some() {
        select = select.filter(plant::Column::Availability.gt(0));
    }

    let rows = select
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
    path = "/search",
    tag = "Catalog",
    operation_id = "searchPlants",
    summary = "Search plants with pagination",
    description = "Case-insensitive substring search over plant names and their category names. Query characters always match literally, including LIKE wildcards.",
    params(SearchQuery),
    responses(
        (status = 200, description = "One page of matches plus pagination metadata", body = SearchResponse),
        (status = 400, description = "Missing query (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn search_plants(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let q = match query.q {
        Some(q) if !q.is_empty() => q,
        _ => return Err(AppError::Validation("Search query is required.".into())),
    };

    let page = Ord::max(query.page.unwrap_or(1), 1);
    let limit = Ord::max(query.limit.unwrap_or(DEFAULT_PAGE_SIZE), 1);

    let pattern = contains_pattern(&q);
    let matches = Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((plant::Entity, plant::Column::Name))))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((
                category::Entity,
                category::Column::Name,
            ))))
            .like(LikeExpr::new(pattern).escape('\\')),
        );

    let base = plant::Entity::find()
        .join(JoinType::LeftJoin, plant::category_relation())
        .filter(matches);

    // Page slice and total are two independent reads of the same predicate;
    // writes landing between them can skew the totals.
    let total = base.clone().count(&state.db).await?;

    let rows = base
        .select_also(category::Entity)
        .order_by_asc(plant::Column::Id)
        .offset(Some((page - 1) * limit))
        .limit(Some(limit))
        .all(&state.db)
        .await?;

    let plants = rows
        .into_iter()
        .map(|(p, c)| PlantResponse::from_parts(p, c))
        .collect();

    Ok(Json(SearchResponse {
        plants,
        pagination: Pagination {
            current_page: page,
            total_pages: total.div_ceil(limit),
            total_items: total,
            items_per_page: limit,
        },
    }))
}
