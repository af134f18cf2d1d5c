mod common;

use common::{FailingCatalog, catalog, product, ready_listing, ready_state};
use storefront_client::{
    catalog::{CatalogStatus, FilterCriteria, FilterInput, ListingController, PriceRange},
    dto::products::ListingView,
    services::listing_service,
    state::AppState,
};

// Twenty products, default criteria: first batch shows 12, one load more shows all.
#[tokio::test]
async fn first_render_shows_one_batch_then_load_more_shows_rest() -> anyhow::Result<()> {
    let state = ready_state(catalog(20)).await;

    let first = listing_service::listing(&state).await;
    let view = first.data.expect("listing view");
    assert_eq!(view.status, CatalogStatus::Ready);
    assert_eq!(view.products.len(), 12);
    assert_eq!(view.filtered_count, 20);
    assert!(view.has_more);
    assert_eq!(view.summary.as_deref(), Some("Showing 12 of 20 products"));

    let meta = first.meta.expect("meta");
    assert_eq!(meta.batch, Some(1));
    assert_eq!(meta.batch_size, Some(12));
    assert_eq!(meta.shown, Some(12));
    assert_eq!(meta.total, Some(20));

    let more = listing_service::load_more(&state).await.data.expect("listing view");
    assert_eq!(more.products.len(), 20);
    assert_eq!(more.batch, 2);
    assert!(!more.has_more);
    assert_eq!(more.summary.as_deref(), Some("All 20 products loaded"));
    Ok(())
}

#[tokio::test]
async fn applying_a_category_filters_exactly_and_resets_the_cursor() {
    let products = catalog(40);
    let electronics: Vec<u64> = products
        .iter()
        .filter(|p| p.category == "electronics")
        .map(|p| p.id)
        .collect();
    let state = ready_state(products).await;

    listing_service::load_more(&state).await;
    assert_eq!(state.listing.read().await.cursor().batch(), 2);

    listing_service::update_draft(
        &state,
        FilterInput {
            category: vec!["electronics".to_string()],
            price_range: Some([0.0, 1000.0]),
            rating: None,
        },
    )
    .await;
    let view = listing_service::apply_filters(&state)
        .await
        .data
        .expect("listing view");

    assert_eq!(view.batch, 1);
    assert_eq!(view.filtered_count, electronics.len());
    let shown: Vec<u64> = view.products.iter().map(|card| card.product.id).collect();
    assert_eq!(shown, electronics);
}

#[tokio::test]
async fn degenerate_price_range_returns_only_exact_prices() {
    let products = vec![
        product(1, "jewelery", 100.0, Some(3.0)),
        product(2, "jewelery", 110.0, Some(3.0)),
        product(3, "electronics", 100.0, None),
    ];
    let state = ready_state(products).await;

    listing_service::update_draft(
        &state,
        FilterInput {
            price_range: Some([100.0, 100.0]),
            ..FilterInput::default()
        },
    )
    .await;
    let view = listing_service::apply_filters(&state).await.data.unwrap();
    let shown: Vec<u64> = view.products.iter().map(|card| card.product.id).collect();
    assert_eq!(shown, vec![1, 3]);
}

#[tokio::test]
async fn failed_fetch_ends_loading_with_fixed_message() {
    let state = AppState::new();
    assert!(state.listing.read().await.is_loading());

    listing_service::load_catalog(&state, &FailingCatalog).await;

    let response = listing_service::listing(&state).await;
    assert_eq!(response.message, "Failed to fetch products. Please try again");
    let view = response.data.expect("listing view");
    assert_eq!(view.status, CatalogStatus::Error);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to fetch products. Please try again")
    );
    assert!(view.products.is_empty());
    assert_eq!(view.filtered_count, 0);
    assert!(view.empty.is_none());

    let listing = state.listing.read().await;
    assert!(!listing.is_loading());
    assert!(listing.filtered().is_empty());
    assert!(listing.displayed().is_empty());
}

#[tokio::test]
async fn catalog_is_fetched_only_once() {
    let state = ready_state(catalog(5)).await;
    listing_service::load_catalog(&state, &FailingCatalog).await;

    let listing = state.listing.read().await;
    assert_eq!(listing.status(), CatalogStatus::Ready);
    assert_eq!(listing.catalog().len(), 5);
}

#[test]
fn listing_is_loading_until_settled() {
    let mut listing = ListingController::new();
    assert!(listing.is_loading());
    assert!(listing.begin_fetch());
    assert!(listing.is_loading());
    assert!(listing.displayed().is_empty());

    listing.settle(Ok(catalog(3)));
    assert!(!listing.is_loading());
    assert!(listing.fetched_at().is_some());
    assert!(!listing.begin_fetch());
}

#[test]
fn draft_edits_do_not_touch_the_listing_until_applied() {
    let mut listing = ready_listing(catalog(30));
    listing.load_more();

    listing.draft_mut().toggle_category("jewelery", true);
    assert_eq!(listing.applied(), &FilterCriteria::default());
    assert_eq!(listing.filtered().len(), 30);
    assert_eq!(listing.cursor().batch(), 2);

    assert!(listing.apply_draft());
    assert_eq!(listing.cursor().batch(), 1);
    assert!(listing.filtered().iter().all(|p| p.category == "jewelery"));
    assert_eq!(listing.draft(), listing.applied());
}

#[test]
fn reapplying_identical_criteria_keeps_the_cursor() {
    let mut listing = ready_listing(catalog(30));
    listing.load_more();

    assert!(!listing.apply(FilterCriteria::default()));
    assert_eq!(listing.cursor().batch(), 2);
}

#[test]
fn each_criteria_field_change_resets_the_cursor() {
    let mut listing = ready_listing(catalog(40));

    let changes = [
        FilterCriteria::new(["electronics".to_string()], PriceRange::default(), None),
        FilterCriteria::new(["electronics".to_string()], PriceRange::new(0.0, 900.0), None),
        FilterCriteria::new(["electronics".to_string()], PriceRange::new(0.0, 900.0), Some(2)),
    ];
    for criteria in changes {
        listing.load_more();
        assert!(listing.apply(criteria));
        assert_eq!(listing.cursor().batch(), 1);
    }
}

#[test]
fn clear_filters_resets_draft_and_applied() {
    let mut listing = ready_listing(catalog(30));
    listing.draft_mut().set_rating(Some(4));
    listing.apply_draft();
    listing.draft_mut().toggle_category("electronics", true);

    assert!(listing.clear_filters());
    assert_eq!(listing.applied(), &FilterCriteria::default());
    assert_eq!(listing.draft(), &FilterCriteria::default());
    assert_eq!(listing.filtered().len(), 30);
}

#[test]
fn empty_result_shows_empty_state() {
    let mut listing = ready_listing(catalog(10));
    listing.apply(FilterCriteria::new(["toys".to_string()], PriceRange::default(), None));

    let view = ListingView::from(&listing);
    assert!(view.products.is_empty());
    assert!(!view.has_more);
    assert!(view.summary.is_none());
    let empty = view.empty.expect("empty state");
    assert_eq!(empty.title, "No products found");
    assert_eq!(empty.hint, "Try adjusting your filters");
}

#[test]
fn single_batch_has_no_summary() {
    let listing = ready_listing(catalog(5));
    let view = ListingView::from(&listing);
    assert_eq!(view.products.len(), 5);
    assert!(view.summary.is_none());
    assert!(view.empty.is_none());
}

#[test]
fn cards_carry_a_short_excerpt() {
    let mut long = product(1, "electronics", 10.0, None);
    long.description = "x".repeat(200);
    let listing = ready_listing(vec![long]);

    let view = ListingView::from(&listing);
    let excerpt = &view.products[0].excerpt;
    assert_eq!(excerpt.chars().count(), 83);
    assert!(excerpt.ends_with("..."));
}

#[test]
fn default_price_range_hides_expensive_products() {
    let listing = ready_listing(vec![
        product(1, "electronics", 499.0, None),
        product(2, "electronics", 999.99, None),
    ]);
    let shown: Vec<u64> = listing.displayed().iter().map(|p| p.id).collect();
    assert_eq!(shown, vec![1]);
}

#[tokio::test]
async fn get_product_looks_up_catalog() {
    let state = ready_state(catalog(3)).await;
    let found = listing_service::get_product(&state, 2).await.unwrap();
    assert_eq!(found.data.map(|p| p.id), Some(2));

    assert!(listing_service::get_product(&state, 99).await.is_err());
}

#[tokio::test]
async fn filter_panel_exposes_options_and_draft() {
    let state = ready_state(catalog(3)).await;
    let panel = listing_service::update_draft(
        &state,
        FilterInput {
            rating: Some(3),
            ..FilterInput::default()
        },
    )
    .await
    .data
    .unwrap();

    assert_eq!(panel.draft.rating(), Some(3));
    assert_eq!(panel.applied.rating(), None);
    assert_eq!(panel.options.categories.len(), 4);

    let cleared = listing_service::clear_filters(&state).await.data.unwrap();
    assert_eq!(cleared.draft, FilterCriteria::default());
    let panel = listing_service::filters(&state).await.data.unwrap();
    assert_eq!(panel.draft.rating(), None);
}
