use crate::{
    catalog::{CatalogSource, FilterInput, ListingController},
    dto::products::{FilterPanel, ListingView},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Runs the one catalog fetch and settles the listing with its outcome.
///
/// The listing lock is released while the request is in flight, so readers see
/// `loading` until the result is stored.
pub async fn load_catalog<S: CatalogSource>(state: &AppState, source: &S) {
    if !state.listing.write().await.begin_fetch() {
        tracing::warn!("catalog fetch already started, ignoring");
        return;
    }

    let result = source.fetch_products().await;
    state.listing.write().await.settle(result);
}

pub async fn listing(state: &AppState) -> ApiResponse<ListingView> {
    let listing = state.listing.read().await;
    listing_response(&listing)
}

pub async fn load_more(state: &AppState) -> ApiResponse<ListingView> {
    let mut listing = state.listing.write().await;
    listing.load_more();
    tracing::debug!(batch = listing.cursor().batch(), "load more");
    listing_response(&listing)
}

pub async fn get_product(state: &AppState, id: u64) -> AppResult<ApiResponse<Product>> {
    let listing = state.listing.read().await;
    let product = listing.find(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn filters(state: &AppState) -> ApiResponse<FilterPanel> {
    let listing = state.listing.read().await;
    ApiResponse::success("Filters", FilterPanel::from(&*listing), None)
}

/// Replaces the draft. The listing itself is unchanged until the draft is applied.
pub async fn update_draft(state: &AppState, input: FilterInput) -> ApiResponse<FilterPanel> {
    let mut listing = state.listing.write().await;
    listing.set_draft(input.into());
    ApiResponse::success("Draft updated", FilterPanel::from(&*listing), None)
}

pub async fn apply_filters(state: &AppState) -> ApiResponse<ListingView> {
    let mut listing = state.listing.write().await;
    listing.apply_draft();
    listing_response(&listing)
}

pub async fn clear_filters(state: &AppState) -> ApiResponse<ListingView> {
    let mut listing = state.listing.write().await;
    listing.clear_filters();
    listing_response(&listing)
}

fn listing_response(listing: &ListingController) -> ApiResponse<ListingView> {
    let view = ListingView::from(listing);
    let meta = Meta::new(
        view.batch,
        listing.cursor().batch_size(),
        view.displayed_count,
        view.filtered_count,
    );
    let message = match view.error.as_deref() {
        Some(error) => error.to_string(),
        None => "Products".to_string(),
    };
    ApiResponse::success(message, view, Some(meta))
}
