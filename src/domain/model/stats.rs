use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Product count and average price (rounded to 2 decimals) per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryStats {
    pub category_name: String,
    pub total_products: i64,
    pub average_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReviewStats {
    pub product_id: i64,
    pub product_name: String,
    pub average_rating: f64,
}
