use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{CatalogStatus, FilterCriteria, FilterOptions, ListingController},
    models::Product,
};

pub const EXCERPT_CHARS: usize = 80;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    pub excerpt: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            excerpt: excerpt(&product.description),
            product: product.clone(),
        }
    }
}

/// First 80 characters of the description followed by an ellipsis.
pub fn excerpt(description: &str) -> String {
    let mut short: String = description.chars().take(EXCERPT_CHARS).collect();
    short.push_str("...");
    short
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct EmptyState {
    pub title: String,
    pub hint: String,
}

/// Everything the product listing screen renders.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListingView {
    pub status: CatalogStatus,
    pub error: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub products: Vec<ProductCard>,
    pub displayed_count: usize,
    pub filtered_count: usize,
    pub batch: usize,
    pub has_more: bool,
    pub summary: Option<String>,
    pub empty: Option<EmptyState>,
    pub filters: FilterCriteria,
    pub draft: FilterCriteria,
}

impl From<&ListingController> for ListingView {
    fn from(listing: &ListingController) -> Self {
        let displayed = listing.displayed();
        let displayed_count = displayed.len();
        let filtered_count = listing.filtered().len();
        let has_more = listing.has_more();
        let ready = listing.status() == CatalogStatus::Ready;

        let summary = if !ready || filtered_count == 0 {
            None
        } else if has_more {
            Some(format!(
                "Showing {displayed_count} of {filtered_count} products"
            ))
        } else if filtered_count > listing.cursor().batch_size() {
            Some(format!("All {filtered_count} products loaded"))
        } else {
            None
        };

        let empty = (ready && filtered_count == 0).then(|| EmptyState {
            title: "No products found".to_string(),
            hint: "Try adjusting your filters".to_string(),
        });

        Self {
            status: listing.status(),
            error: listing.error().map(str::to_string),
            fetched_at: listing.fetched_at(),
            products: displayed.iter().map(ProductCard::from).collect(),
            displayed_count,
            filtered_count,
            batch: listing.cursor().batch(),
            has_more,
            summary,
            empty,
            filters: listing.applied().clone(),
            draft: listing.draft().clone(),
        }
    }
}

/// The filter panel: committed criteria, the draft being edited, and the choices.
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterPanel {
    pub applied: FilterCriteria,
    pub draft: FilterCriteria,
    pub options: FilterOptions,
}

impl From<&ListingController> for FilterPanel {
    fn from(listing: &ListingController) -> Self {
        Self {
            applied: listing.applied().clone(),
            draft: listing.draft().clone(),
            options: FilterOptions::standard(),
        }
    }
}
