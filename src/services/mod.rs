pub mod cart_service;
pub mod listing_service;
