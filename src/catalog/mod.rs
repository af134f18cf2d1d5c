pub mod client;
pub mod filters;
pub mod listing;
pub mod pipeline;

pub use client::{CatalogSource, HttpCatalog, StaticCatalog};
pub use filters::{FilterCriteria, FilterInput, FilterOptions, PriceRange};
pub use listing::{CatalogStatus, ListingController};
pub use pipeline::{BATCH_SIZE, Cursor, page, recompute};
