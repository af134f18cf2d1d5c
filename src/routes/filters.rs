use axum::{
    Json, Router,
    extract::State,
    routing::{get, post, put},
};

use crate::{
    catalog::FilterInput,
    dto::products::{FilterPanel, ListingView},
    middleware::json::AppJson,
    response::ApiResponse,
    services::listing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_filters))
        .route("/draft", put(update_draft))
        .route("/apply", post(apply_filters))
        .route("/clear", post(clear_filters))
}

#[utoipa::path(
    get,
    path = "/api/filters",
    responses(
        (status = 200, description = "Applied criteria, draft and panel options", body = ApiResponse<FilterPanel>)
    ),
    tag = "Filters"
)]
pub async fn get_filters(State(state): State<AppState>) -> Json<ApiResponse<FilterPanel>> {
    Json(listing_service::filters(&state).await)
}

#[utoipa::path(
    put,
    path = "/api/filters/draft",
    request_body = FilterInput,
    responses(
        (status = 200, description = "Draft replaced, out-of-range values clamped", body = ApiResponse<FilterPanel>),
        (status = 400, description = "Malformed body")
    ),
    tag = "Filters"
)]
pub async fn update_draft(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FilterInput>,
) -> Json<ApiResponse<FilterPanel>> {
    Json(listing_service::update_draft(&state, payload).await)
}

#[utoipa::path(
    post,
    path = "/api/filters/apply",
    responses(
        (status = 200, description = "Draft committed, listing recomputed", body = ApiResponse<ListingView>)
    ),
    tag = "Filters"
)]
pub async fn apply_filters(State(state): State<AppState>) -> Json<ApiResponse<ListingView>> {
    Json(listing_service::apply_filters(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/filters/clear",
    responses(
        (status = 200, description = "Criteria and draft reset to defaults", body = ApiResponse<ListingView>)
    ),
    tag = "Filters"
)]
pub async fn clear_filters(State(state): State<AppState>) -> Json<ApiResponse<ListingView>> {
    Json(listing_service::clear_filters(&state).await)
}
