//! Pure steps from catalog to displayed products.

use crate::{catalog::filters::FilterCriteria, models::Product};

pub const BATCH_SIZE: usize = 12;

/// Products passing `criteria`, in catalog order.
pub fn recompute(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect()
}

/// The first `batch * batch_size` products of `filtered`.
pub fn page(filtered: &[Product], batch: usize, batch_size: usize) -> &[Product] {
    let end = batch.saturating_mul(batch_size).min(filtered.len());
    &filtered[..end]
}

/// Load-more position over the filtered list. Starts at batch 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    batch: usize,
    batch_size: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(BATCH_SIZE)
    }
}

impl Cursor {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch: 1,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn load_more(&mut self) {
        self.batch = self.batch.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.batch = 1;
    }

    pub fn display_count(&self) -> usize {
        self.batch.saturating_mul(self.batch_size)
    }

    pub fn page<'a>(&self, filtered: &'a [Product]) -> &'a [Product] {
        page(filtered, self.batch, self.batch_size)
    }
}
