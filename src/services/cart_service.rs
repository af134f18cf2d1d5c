use crate::{
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::{AppError, AppResult},
    models::CartItem,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Quantity floor is 1; anything larger than the cart can hold saturates.
pub fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(1, u32::MAX as i64) as u32
}

pub fn cart(state: &AppState) -> ApiResponse<CartView> {
    let cart = state.cart.snapshot();
    ApiResponse::success("OK", CartView::from(&cart), Some(Meta::empty()))
}

/// Turns a catalog product into a cart line. Ids outside the catalog are rejected.
pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartItem>> {
    let product = {
        let listing = state.listing.read().await;
        listing.find(payload.product_id).cloned()
    };
    let Some(product) = product else {
        return Err(AppError::NotFound);
    };

    let item = state
        .cart
        .add_to_cart(product, clamp_quantity(payload.quantity));
    Ok(ApiResponse::success("Added to cart", item, None))
}

pub fn update_quantity(
    state: &AppState,
    product_id: u64,
    payload: UpdateQuantityRequest,
) -> ApiResponse<CartView> {
    state
        .cart
        .update_quantity(product_id, clamp_quantity(payload.quantity));
    cart(state)
}

pub fn remove_from_cart(state: &AppState, product_id: u64) -> ApiResponse<CartView> {
    let removed = state.cart.remove_from_cart(product_id);
    let cart = state.cart.snapshot();
    let message = if removed {
        "Removed from cart"
    } else {
        "Not in cart"
    };
    ApiResponse::success(message, CartView::from(&cart), Some(Meta::empty()))
}
