use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::{
        CatalogStatus, FilterCriteria, FilterInput, FilterOptions,
        filters::{CategoryOption, RatingOption},
    },
    dto::{
        cart::{AddToCartRequest, CartLine, CartView, UpdateQuantityRequest},
        products::{EmptyState, FilterPanel, ListingView, ProductCard},
    },
    models::{CartItem, Product, Rating},
    response::{ApiResponse, Meta},
    routes::{cart, filters, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::load_more,
        products::get_product,
        filters::get_filters,
        filters::update_draft,
        filters::apply_filters,
        filters::clear_filters,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart
    ),
    components(
        schemas(
            Product,
            Rating,
            CartItem,
            CartLine,
            CartView,
            AddToCartRequest,
            UpdateQuantityRequest,
            CatalogStatus,
            FilterCriteria,
            FilterInput,
            FilterOptions,
            CategoryOption,
            RatingOption,
            FilterPanel,
            ProductCard,
            EmptyState,
            ListingView,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ListingView>,
            ApiResponse<FilterPanel>,
            ApiResponse<CartView>,
            ApiResponse<CartItem>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product listing screen"),
        (name = "Filters", description = "Filter panel"),
        (name = "Cart", description = "Cart screen"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
