//! Customer lookups and contact updates.

use crate::domain::model::{Customer, CustomerOrderLine, CustomerUpdate, Order};
use crate::storage::error::DbResult;
use sqlx::SqlitePool;

/// One row per order line of the customer. Customers without order lines yield no rows.
pub async fn get_customer_with_orders(
    pool: &SqlitePool,
    customer_id: i64,
) -> DbResult<Vec<CustomerOrderLine>> {
    let rows = sqlx::query_as::<_, CustomerOrderLine>(
        "SELECT customers.customer_id, customers.name AS customer_name,
                customers.address, customers.phone, customers.email,
                orders.order_id, orders.order_date, orders.shipping_method_id,
                shipping_methods.name AS shipping_method,
                products.product_id, products.name AS product_name,
                order_details.quantity, order_details.status
         FROM customers
         JOIN orders
           ON customers.customer_id = orders.customer_id
         JOIN order_details
           ON orders.order_id = order_details.order_id
         JOIN products
           ON order_details.product_id = products.product_id
         LEFT JOIN shipping_methods
           ON orders.shipping_method_id = shipping_methods.shipping_method_id
         WHERE customers.customer_id = ?
         ORDER BY orders.order_id, products.product_id",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_customer_by_id(pool: &SqlitePool, customer_id: i64) -> DbResult<Option<Customer>> {
    let row = sqlx::query_as::<_, Customer>(
        "SELECT customer_id, name, address, email, phone FROM customers WHERE customer_id = ?",
    )
    .bind(customer_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Rewrites the contact details (and the name, if given). `None` when no customer has `id`.
pub async fn update_customer(
    pool: &SqlitePool,
    customer_id: i64,
    update: &CustomerUpdate,
) -> DbResult<Option<Customer>> {
    let result = sqlx::query(
        "UPDATE customers
         SET name = COALESCE(?, name), address = ?, email = ?, phone = ?
         WHERE customer_id = ?",
    )
    .bind(update.name.as_deref())
    .bind(&update.address)
    .bind(&update.email)
    .bind(&update.phone)
    .bind(customer_id)
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_customer_by_id(pool, customer_id).await
}

pub async fn get_customer_orders(pool: &SqlitePool, customer_id: i64) -> DbResult<Vec<Order>> {
    let rows = sqlx::query_as::<_, Order>(
        "SELECT order_id, customer_id, order_date, shipping_method_id
         FROM orders WHERE customer_id = ? ORDER BY order_id",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
