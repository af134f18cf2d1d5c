use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::products::ListingView,
    error::AppResult,
    models::Product,
    response::ApiResponse,
    services::listing_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/load-more", post(load_more))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Product listing screen", body = ApiResponse<ListingView>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<ListingView>> {
    Json(listing_service::listing(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/products/load-more",
    responses(
        (status = 200, description = "Listing with one more batch shown", body = ApiResponse<ListingView>)
    ),
    tag = "Products"
)]
pub async fn load_more(State(state): State<AppState>) -> Json<ApiResponse<ListingView>> {
    Json(listing_service::load_more(&state).await)
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    Ok(Json(listing_service::get_product(&state, id).await?))
}
