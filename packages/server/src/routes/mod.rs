use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/categories", category_routes())
        .nest("/plants", plant_routes())
        .nest("/common", common_routes())
}

fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::category::create_category))
        .routes(routes!(handlers::category::delete_category))
}

fn plant_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::plant::list_plants,
            handlers::plant::create_plant
        ))
        .routes(routes!(
            handlers::plant::get_plant,
            handlers::plant::delete_plant
        ))
}

fn common_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::common::get_all_categories))
        .routes(routes!(handlers::common::get_suggestions))
        .routes(routes!(handlers::common::filter_plants))
        .routes(routes!(handlers::common::search_plants))
}
