mod common;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::{catalog, ready_state};
use storefront_client::{
    dto::cart::{AddToCartRequest, UpdateQuantityRequest},
    error::AppError,
    middleware::json::AppJson,
    routes::cart::{add_to_cart, cart_list, remove_from_cart, update_quantity},
    services::cart_service,
};

// Listing card -> add twice -> adjust quantity -> remove.
#[tokio::test]
async fn add_adjust_and_remove_through_handlers() -> anyhow::Result<()> {
    let state = ready_state(catalog(6)).await;

    let Json(added) = add_to_cart(
        State(state.clone()),
        AppJson(AddToCartRequest {
            product_id: 2,
            quantity: 1,
        }),
    )
    .await?;
    assert_eq!(added.data.map(|item| item.quantity), Some(1));

    let Json(merged) = add_to_cart(
        State(state.clone()),
        AppJson(AddToCartRequest {
            product_id: 2,
            quantity: 1,
        }),
    )
    .await?;
    assert_eq!(merged.data.map(|item| item.quantity), Some(2));

    let Json(view) = update_quantity(
        State(state.clone()),
        Path(2),
        AppJson(UpdateQuantityRequest { quantity: 0 }),
    )
    .await;
    let view = view.data.expect("cart view");
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].item.quantity, 1);
    assert!(!view.items[0].can_decrement);

    let Json(view) = update_quantity(
        State(state.clone()),
        Path(2),
        AppJson(UpdateQuantityRequest { quantity: 3 }),
    )
    .await;
    let view = view.data.expect("cart view");
    assert_eq!(view.count, 3);
    assert!(view.items[0].can_decrement);
    assert_eq!(view.total, view.items[0].line_total);

    let Json(removed) = remove_from_cart(State(state.clone()), Path(2)).await;
    assert_eq!(removed.message, "Removed from cart");
    let view = removed.data.expect("cart view");
    assert!(view.items.is_empty());
    assert_eq!(view.empty_message.as_deref(), Some("Your cart is empty."));
    Ok(())
}

#[tokio::test]
async fn adding_unknown_product_is_not_found_and_cart_unchanged() {
    let state = ready_state(catalog(3)).await;

    let err = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            product_id: 404,
            quantity: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    assert!(state.cart.snapshot().is_empty());
}

#[tokio::test]
async fn removing_absent_line_is_not_an_error() {
    let state = ready_state(catalog(3)).await;
    state
        .cart
        .add_to_cart(state.listing.read().await.find(1).cloned().unwrap(), 1);

    let Json(response) = remove_from_cart(State(state.clone()), Path(3)).await;
    assert_eq!(response.message, "Not in cart");
    assert_eq!(response.data.map(|view| view.items.len()), Some(1));
}

#[tokio::test]
async fn cart_screen_lists_lines_in_insertion_order() {
    let state = ready_state(catalog(5)).await;
    for id in [4, 1, 4] {
        cart_service::add_to_cart(
            &state,
            AddToCartRequest {
                product_id: id,
                quantity: 1,
            },
        )
        .await
        .unwrap();
    }

    let Json(response) = cart_list(State(state)).await;
    let view = response.data.expect("cart view");
    let ids: Vec<u64> = view.items.iter().map(|line| line.item.product.id).collect();
    assert_eq!(ids, vec![4, 1]);
    assert_eq!(view.count, 3);
}

#[test]
fn add_request_defaults_quantity_to_one() {
    let request: AddToCartRequest =
        serde_json::from_value(serde_json::json!({ "product_id": 7 })).unwrap();
    assert_eq!(request.quantity, 1);
}

#[test]
fn wire_quantities_clamp_into_cart_range() {
    assert_eq!(cart_service::clamp_quantity(-1), 1);
    assert_eq!(cart_service::clamp_quantity(0), 1);
    assert_eq!(cart_service::clamp_quantity(7), 7);
    assert_eq!(cart_service::clamp_quantity(i64::MAX), u32::MAX);

    let request: UpdateQuantityRequest =
        serde_json::from_value(serde_json::json!({ "quantity": -1 })).unwrap();
    assert_eq!(request.quantity, -1);
}

#[tokio::test]
async fn negative_quantity_update_floors_existing_line() {
    let state = ready_state(catalog(3)).await;
    let product = state.listing.read().await.find(1).cloned().unwrap();
    state.cart.add_to_cart(product, 3);

    let Json(view) = update_quantity(
        State(state.clone()),
        Path(1),
        AppJson(UpdateQuantityRequest { quantity: -1 }),
    )
    .await;
    let view = view.data.expect("cart view");
    assert_eq!(view.items[0].item.quantity, 1);
    assert_eq!(view.count, 1);
}
