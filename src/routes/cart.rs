use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::AppResult,
    middleware::json::AppJson,
    models::CartItem,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart))
        .route(
            "/{product_id}",
            patch(update_quantity).delete(remove_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart screen", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_list(State(state): State<AppState>) -> Json<ApiResponse<CartView>> {
    Json(cart_service::cart(&state))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add or merge cart line", body = ApiResponse<CartItem>),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Product not in catalog"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload).await?))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = u64, Path, description = "Product ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set, never below 1", body = ApiResponse<CartView>),
        (status = 400, description = "Malformed body"),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
    AppJson(payload): AppJson<UpdateQuantityRequest>,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::update_quantity(&state, product_id, payload))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Line removed, or cart unchanged if absent", body = ApiResponse<CartView>),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
) -> Json<ApiResponse<CartView>> {
    Json(cart_service::remove_from_cart(&state, product_id))
}
