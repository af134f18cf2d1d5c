#![allow(dead_code)]

use storefront_client::{
    catalog::{CatalogSource, ListingController, StaticCatalog},
    error::CatalogError,
    models::{Product, Rating},
    services::listing_service,
    state::AppState,
};

pub const CATEGORIES: [&str; 4] = ["men's clothing", "women's clothing", "jewelery", "electronics"];

pub fn product(id: u64, category: &str, price: f64, rate: Option<f64>) -> Product {
    Product {
        id,
        title: format!("Product {id}"),
        price,
        category: category.to_string(),
        description: format!("Description of product {id}"),
        image: format!("https://example.test/img/{id}.jpg"),
        rating: rate.map(|rate| Rating { rate, count: 10 }),
    }
}

/// `count` products cycling through the four categories, all priced under 500.
pub fn catalog(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| {
            let category = CATEGORIES[(id as usize - 1) % CATEGORIES.len()];
            let price = 10.0 + (id as f64) * 5.0;
            let rate = 1.0 + (id % 5) as f64 * 0.9;
            product(id, category, price, Some(rate))
        })
        .collect()
}

pub struct FailingCatalog;

impl CatalogSource for FailingCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let err = serde_json::from_str::<Vec<Product>>("not json").unwrap_err();
        Err(CatalogError::Decode(err))
    }
}

pub fn ready_listing(products: Vec<Product>) -> ListingController {
    let mut listing = ListingController::new();
    assert!(listing.begin_fetch());
    listing.settle(Ok(products));
    listing
}

pub async fn ready_state(products: Vec<Product>) -> AppState {
    let state = AppState::new();
    listing_service::load_catalog(&state, &StaticCatalog::new(products)).await;
    state
}
