//! Session cart shared by every view.
//!
//! [`CartStore`] is a cheap handle; clones point at the same cart. The cart lives
//! inside a `watch` sender, so each mutation runs under the channel's write lock
//! and subscribers are woken once it has been applied.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;

use crate::models::{CartItem, Product, round_cents};

/// Cart contents in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Units across all lines.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        round_cents(self.items.iter().map(CartItem::line_total).sum())
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

#[derive(Clone)]
pub struct CartStore {
    inner: Arc<watch::Sender<Cart>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(watch::Sender::new(Cart::default())),
        }
    }

    /// Adds `quantity` units of `product`. An existing line for the same id is
    /// merged rather than duplicated.
    pub fn add_to_cart(&self, product: Product, quantity: u32) -> CartItem {
        let quantity = quantity.max(1);
        let mut line = CartItem { product, quantity };
        self.inner.send_modify(|cart| match cart.position(line.id()) {
            Some(idx) => {
                let existing = &mut cart.items[idx];
                existing.quantity = existing.quantity.saturating_add(quantity);
                line = existing.clone();
            }
            None => cart.items.push(line.clone()),
        });
        tracing::debug!(product_id = line.id(), quantity = line.quantity, "cart line added");
        line
    }

    /// Returns whether a line was removed. Unknown ids leave the cart untouched.
    pub fn remove_from_cart(&self, id: u64) -> bool {
        let removed = self.inner.send_if_modified(|cart| match cart.position(id) {
            Some(idx) => {
                cart.items.remove(idx);
                true
            }
            None => false,
        });
        if removed {
            tracing::debug!(product_id = id, "cart line removed");
        }
        removed
    }

    /// Sets the quantity of an existing line, never below 1. Removal only goes
    /// through [`CartStore::remove_from_cart`].
    pub fn update_quantity(&self, id: u64, quantity: u32) -> Option<CartItem> {
        let quantity = quantity.max(1);
        let mut updated = None;
        self.inner.send_if_modified(|cart| {
            let Some(idx) = cart.position(id) else {
                return false;
            };
            let line = &mut cart.items[idx];
            let changed = line.quantity != quantity;
            line.quantity = quantity;
            updated = Some(line.clone());
            changed
        });
        if let Some(item) = &updated {
            tracing::debug!(product_id = id, quantity = item.quantity, "cart quantity set");
        }
        updated
    }

    pub fn snapshot(&self) -> Cart {
        self.inner.borrow().clone()
    }

    /// Receiver that is marked changed after every mutation that altered the cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.inner.subscribe()
    }
}
