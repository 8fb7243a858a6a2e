//! Product lookups and mutations.

use crate::domain::model::{
    CategoryProduct, NewProduct, PriceUpdate, Product, ProductListing, ProductMatch,
};
use crate::storage::error::DbResult;
use crate::storage::filter::ProductFilter;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

// Columns declared DECIMAL/NUMERIC store whole prices as INTEGER; the cast keeps `price` REAL.
const PRODUCT_COLUMNS: &str =
    "product_id, manufacturer_id, name, description, CAST(price AS REAL) AS price, stock";

/// Every product with its category and manufacturer names, one row per category membership.
pub async fn list_products(pool: &SqlitePool) -> DbResult<Vec<ProductListing>> {
    let rows = sqlx::query_as::<_, ProductListing>(
        "SELECT products.product_id, products.name AS product_name,
                products.description, CAST(products.price AS REAL) AS price, products.stock,
                categories.name AS category_name,
                manufacturers.name AS manufacturer_name
         FROM products
         LEFT JOIN products_categories
           ON products.product_id = products_categories.product_id
         LEFT JOIN categories
           ON categories.category_id = products_categories.category_id
         LEFT JOIN manufacturers
           ON products.manufacturer_id = manufacturers.manufacturer_id
         ORDER BY products.product_id, categories.category_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_product_by_id(pool: &SqlitePool, id: i64) -> DbResult<Option<Product>> {
    let row = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE product_id = ?",
        PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Products whose name matches `%term%` under the engine's `LIKE` rules.
pub async fn search_products_by_name(pool: &SqlitePool, term: &str) -> DbResult<Vec<Product>> {
    let rows = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE name LIKE ? ORDER BY product_id",
        PRODUCT_COLUMNS
    ))
    .bind(format!("%{}%", term))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_products_by_category(
    pool: &SqlitePool,
    category_id: i64,
) -> DbResult<Vec<CategoryProduct>> {
    let rows = sqlx::query_as::<_, CategoryProduct>(
        "SELECT products.product_id, products.name AS product_name,
                categories.category_id, categories.name AS category_name
         FROM products_categories
         JOIN products
           ON products_categories.product_id = products.product_id
         JOIN categories
           ON categories.category_id = products_categories.category_id
         WHERE categories.category_id = ?
         ORDER BY products.product_id",
    )
    .bind(category_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Products matching every term present in `filter`; an empty filter matches all
/// categorised products.
pub async fn search_products_by_name_and_category(
    pool: &SqlitePool,
    filter: &ProductFilter,
) -> DbResult<Vec<ProductMatch>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT products.product_id, products.name AS product_name,
                categories.name AS category_name
         FROM products
         JOIN products_categories
           ON products.product_id = products_categories.product_id
         JOIN categories
           ON categories.category_id = products_categories.category_id",
    );
    filter.push_where(&mut qb);
    qb.push(" ORDER BY products.product_id, categories.category_id");

    let rows = qb.build_query_as::<ProductMatch>().fetch_all(pool).await?;
    Ok(rows)
}

pub async fn manufacturer_exists(pool: &SqlitePool, manufacturer_id: i64) -> DbResult<bool> {
    let found: Option<i64> =
        sqlx::query_scalar("SELECT 1 FROM manufacturers WHERE manufacturer_id = ?")
            .bind(manufacturer_id)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}

pub async fn category_exists(pool: &SqlitePool, category_id: i64) -> DbResult<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM categories WHERE category_id = ?")
        .bind(category_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Inserts the product and, when a category is given, its join row. Both statements share one
/// transaction, so a failed join insert leaves no orphan product behind.
pub async fn add_product(pool: &SqlitePool, product: &NewProduct) -> DbResult<i64> {
    let mut tx = pool.begin().await?;

    let product_id = sqlx::query(
        "INSERT INTO products (manufacturer_id, name, description, price, stock)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(product.manufacturer_id)
    .bind(&product.name)
    .bind(product.description.as_deref())
    .bind(product.price)
    .bind(product.stock)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    if let Some(category_id) = product.category_id {
        sqlx::query("INSERT INTO products_categories (product_id, category_id) VALUES (?, ?)")
            .bind(product_id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(product_id)
}

/// Sets a new price. `None` when no product has `id`.
pub async fn update_product_price(
    pool: &SqlitePool,
    id: i64,
    price: f64,
) -> DbResult<Option<PriceUpdate>> {
    let result = sqlx::query("UPDATE products SET price = ? WHERE product_id = ?")
        .bind(price)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Ok(None);
    }

    let name: Option<String> = sqlx::query_scalar("SELECT name FROM products WHERE product_id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(name.map(|name| PriceUpdate {
        product_id: id,
        name,
        price,
    }))
}

/// Deletes the product row and returns the number of rows removed. Join rows and reviews
/// go with it through the schema's `ON DELETE CASCADE` rules.
pub async fn delete_product(pool: &SqlitePool, id: i64) -> DbResult<u64> {
    let result = sqlx::query("DELETE FROM products WHERE product_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
