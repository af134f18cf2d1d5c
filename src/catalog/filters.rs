use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

pub const PRICE_MIN: f64 = 0.0;
pub const PRICE_MAX: f64 = 1000.0;
pub const PRICE_STEP: f64 = 10.0;
pub const DEFAULT_PRICE_RANGE: [f64; 2] = [0.0, 500.0];
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 4;

/// Inclusive price bounds, always ordered and inside the slider range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        let min = clamp_price(min, PRICE_MIN);
        let max = clamp_price(max, PRICE_MAX);
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::from(DEFAULT_PRICE_RANGE)
    }
}

impl From<[f64; 2]> for PriceRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(range: PriceRange) -> Self {
        [range.min, range.max]
    }
}

fn clamp_price(value: f64, nan_fallback: f64) -> f64 {
    if value.is_nan() {
        nan_fallback
    } else {
        value.clamp(PRICE_MIN, PRICE_MAX)
    }
}

/// 0 means unset; anything above the highest option clamps to it.
pub fn clamp_rating(rating: Option<u8>) -> Option<u8> {
    match rating {
        None | Some(0) => None,
        Some(stars) => Some(stars.clamp(MIN_RATING, MAX_RATING)),
    }
}

/// Filter configuration, used both for the applied criteria and the draft.
#[derive(Debug, Clone, PartialEq, Default, Serialize, ToSchema)]
pub struct FilterCriteria {
    #[schema(value_type = Vec<String>)]
    category: BTreeSet<String>,
    #[schema(value_type = Vec<f64>)]
    price_range: PriceRange,
    rating: Option<u8>,
}

impl FilterCriteria {
    pub fn new(
        category: impl IntoIterator<Item = String>,
        price_range: PriceRange,
        rating: Option<u8>,
    ) -> Self {
        Self {
            category: category.into_iter().collect(),
            price_range,
            rating: clamp_rating(rating),
        }
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.category
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn toggle_category(&mut self, category: &str, checked: bool) {
        if checked {
            self.category.insert(category.to_string());
        } else {
            self.category.remove(category);
        }
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.price_range = PriceRange::new(min, max);
    }

    pub fn set_rating(&mut self, rating: Option<u8>) {
        self.rating = clamp_rating(rating);
    }

    /// True when the product passes every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.is_empty() && !self.category.contains(&product.category) {
            return false;
        }
        if let Some(threshold) = self.rating {
            if product.stars() < threshold {
                return false;
            }
        }
        self.price_range.contains(product.price)
    }
}

/// Filter input as sent by the panel. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FilterInput {
    #[serde(default)]
    pub category: Vec<String>,
    #[schema(value_type = Option<Vec<f64>>)]
    pub price_range: Option<[f64; 2]>,
    pub rating: Option<i64>,
}

impl From<FilterInput> for FilterCriteria {
    fn from(input: FilterInput) -> Self {
        let price_range = input
            .price_range
            .map(PriceRange::from)
            .unwrap_or_default();
        // Zero and below clear the threshold; above the top option clamps to it.
        let rating = input
            .rating
            .map(|stars| stars.clamp(0, MAX_RATING as i64) as u8);
        FilterCriteria::new(input.category, price_range, rating)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RatingOption {
    pub id: u8,
    pub label: String,
}

/// Static choices shown by the filter panel.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterOptions {
    pub categories: Vec<CategoryOption>,
    pub ratings: Vec<RatingOption>,
    #[schema(value_type = Vec<f64>)]
    pub price_bounds: [f64; 2],
    pub price_step: f64,
    #[schema(value_type = Vec<f64>)]
    pub default_price_range: [f64; 2],
}

impl FilterOptions {
    pub fn standard() -> Self {
        let categories = [
            ("men's clothing", "Men's Clothing"),
            ("women's clothing", "Women's Clothing"),
            ("jewelery", "Jewelry"),
            ("electronics", "Electronics"),
        ]
        .into_iter()
        .map(|(id, label)| CategoryOption {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect();

        let ratings = (MIN_RATING..=MAX_RATING)
            .rev()
            .map(|stars| RatingOption {
                id: stars,
                label: if stars == 1 {
                    "1 star & up".to_string()
                } else {
                    format!("{stars} stars & up")
                },
            })
            .collect();

        Self {
            categories,
            ratings,
            price_bounds: [PRICE_MIN, PRICE_MAX],
            price_step: PRICE_STEP,
            default_price_range: DEFAULT_PRICE_RANGE,
        }
    }
}
