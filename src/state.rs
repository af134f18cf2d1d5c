use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{cart::CartStore, catalog::ListingController};

#[derive(Clone, Default)]
pub struct AppState {
    pub cart: CartStore,
    pub listing: Arc<RwLock<ListingController>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
