use serde::Serialize;
use utoipa::ToSchema;

/// Pagination info for the listing screen: `shown` of `total` filtered products.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct Meta {
    pub batch: Option<usize>,
    pub batch_size: Option<usize>,
    pub shown: Option<usize>,
    pub total: Option<usize>,
}

impl Meta {
    pub fn new(batch: usize, batch_size: usize, shown: usize, total: usize) -> Self {
        Self {
            batch: Some(batch),
            batch_size: Some(batch_size),
            shown: Some(shown),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            batch: None,
            batch_size: None,
            shown: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
