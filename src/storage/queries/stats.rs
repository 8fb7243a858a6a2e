//! Aggregate reports.

use crate::domain::model::{CategoryStats, ReviewStats};
use crate::storage::error::DbResult;
use sqlx::SqlitePool;

/// Categories sharing a name are reported as one row.
pub async fn get_product_stats(pool: &SqlitePool) -> DbResult<Vec<CategoryStats>> {
    let rows = sqlx::query_as::<_, CategoryStats>(
        "SELECT categories.name AS category_name,
                COUNT(products.product_id) AS total_products,
                ROUND(AVG(products.price), 2) AS average_price
         FROM products
         JOIN products_categories
           ON products.product_id = products_categories.product_id
         JOIN categories
           ON categories.category_id = products_categories.category_id
         GROUP BY categories.name
         ORDER BY categories.name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_review_stats(pool: &SqlitePool) -> DbResult<Vec<ReviewStats>> {
    let rows = sqlx::query_as::<_, ReviewStats>(
        "SELECT products.product_id, products.name AS product_name,
                AVG(reviews.rating) AS average_rating
         FROM reviews
         JOIN products
           ON reviews.product_id = products.product_id
         GROUP BY products.product_id, products.name
         ORDER BY products.product_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
