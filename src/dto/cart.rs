use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{cart::Cart, models::CartItem};

fn default_quantity() -> i64 {
    1
}

/// Quantities are signed on the wire; the cart service clamps them to at least 1.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: u64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub line_total: f64,
    pub can_decrement: bool,
}

impl From<&CartItem> for CartLine {
    fn from(item: &CartItem) -> Self {
        Self {
            line_total: item.line_total(),
            can_decrement: item.quantity > 1,
            item: item.clone(),
        }
    }
}

/// The cart screen.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartLine>,
    pub count: u32,
    pub total: f64,
    pub empty_message: Option<String>,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartLine::from).collect(),
            count: cart.count(),
            total: cart.total(),
            empty_message: cart
                .is_empty()
                .then(|| "Your cart is empty.".to_string()),
        }
    }
}
