use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rating {
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Whole stars used by the rating filter. Products without rating data count as 0.
    pub fn stars(&self) -> u8 {
        let rate = self.rating.as_ref().map(|r| r.rate).unwrap_or(0.0);
        if rate.is_nan() || rate <= 0.0 {
            return 0;
        }
        rate.floor().min(u8::MAX as f64) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> u64 {
        self.product.id
    }

    pub fn line_total(&self) -> f64 {
        round_cents(self.product.price * self.quantity as f64)
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
