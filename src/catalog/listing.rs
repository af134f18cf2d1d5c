use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{
        filters::FilterCriteria,
        pipeline::{Cursor, recompute},
    },
    error::CatalogError,
    models::Product,
};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch products. Please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    Loading,
    Ready,
    Error,
}

/// State behind the product listing screen.
///
/// The catalog is written once by [`ListingController::settle`]. After that only
/// the criteria, the draft and the cursor change, and the filtered list is
/// rebuilt whenever the applied criteria do.
#[derive(Debug)]
pub struct ListingController {
    status: CatalogStatus,
    fetch_started: bool,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
    catalog: Vec<Product>,
    applied: FilterCriteria,
    draft: FilterCriteria,
    cursor: Cursor,
    filtered: Vec<Product>,
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingController {
    pub fn new() -> Self {
        Self::with_cursor(Cursor::default())
    }

    fn with_cursor(cursor: Cursor) -> Self {
        Self {
            status: CatalogStatus::Loading,
            fetch_started: false,
            error: None,
            fetched_at: None,
            catalog: Vec::new(),
            applied: FilterCriteria::default(),
            draft: FilterCriteria::default(),
            cursor,
            filtered: Vec::new(),
        }
    }

    /// Marks the single catalog fetch as in flight. Returns false if it was
    /// already started.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_started {
            return false;
        }
        self.fetch_started = true;
        self.status = CatalogStatus::Loading;
        true
    }

    pub fn settle(&mut self, result: Result<Vec<Product>, CatalogError>) {
        match result {
            Ok(products) => {
                self.catalog = products;
                self.status = CatalogStatus::Ready;
                self.error = None;
                self.fetched_at = Some(Utc::now());
                self.refresh();
                tracing::info!(
                    products = self.catalog.len(),
                    filtered = self.filtered.len(),
                    "catalog ready"
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog fetch failed");
                self.catalog.clear();
                self.filtered.clear();
                self.status = CatalogStatus::Error;
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn find(&self, id: u64) -> Option<&Product> {
        self.catalog.iter().find(|product| product.id == id)
    }

    pub fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FilterCriteria {
        &mut self.draft
    }

    pub fn set_draft(&mut self, draft: FilterCriteria) {
        self.draft = draft;
    }

    /// Commits `criteria`. Returns whether the applied criteria changed; only a
    /// change refilters and sends the cursor back to batch 1.
    pub fn apply(&mut self, criteria: FilterCriteria) -> bool {
        self.draft = criteria.clone();
        if self.applied == criteria {
            return false;
        }
        self.applied = criteria;
        self.refresh();
        tracing::debug!(
            criteria = ?self.applied,
            filtered = self.filtered.len(),
            "filters applied"
        );
        true
    }

    pub fn apply_draft(&mut self) -> bool {
        self.apply(self.draft.clone())
    }

    pub fn clear_filters(&mut self) -> bool {
        self.apply(FilterCriteria::default())
    }

    pub fn load_more(&mut self) {
        self.cursor.load_more();
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn displayed(&self) -> &[Product] {
        self.cursor.page(&self.filtered)
    }

    pub fn has_more(&self) -> bool {
        self.displayed().len() < self.filtered.len()
    }

    fn refresh(&mut self) {
        self.filtered = recompute(&self.catalog, &self.applied);
        self.cursor.reset();
    }
}
