use crate::domain::model::{Customer, CustomerInput};
use crate::storage::queries::customers;
use crate::transport::http::error::{ApiError, StorageContext};
use crate::transport::http::handlers::common::{ok_or_not_found, parse_id, respond, HandlerResult};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "One row per order line of the customer", body = ApiResponse),
        (status = 400, description = "Id is not an integer", body = ApiResponse),
        (status = 404, description = "Customer unknown or without orders", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn get_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = parse_id("Customer", &id)?;
    let rows = customers::get_customer_with_orders(state.db_service.pool(), id)
        .await
        .while_("fetching customer")?;
    ok_or_not_found(&rows, "Customer not found or has no orders.")
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerInput,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Customer not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<CustomerInput>, JsonRejection>,
) -> HandlerResult {
    let id = parse_id("Customer", &id)?;
    let Json(input) = request?;
    let update = input.validate()?;

    let customer: Customer = customers::update_customer(state.db_service.pool(), id, &update)
        .await
        .while_("updating customer")?
        .ok_or_else(|| ApiError::not_found("Customer not found."))?;
    tracing::info!(customer_id = id, "customer updated");

    respond(StatusCode::OK, Some("The customer has been updated."), &customer)
}

#[utoipa::path(
    get,
    path = "/customers/{id}/orders",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Orders of the customer", body = ApiResponse),
        (status = 400, description = "Id is not an integer", body = ApiResponse),
        (status = 404, description = "No orders", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn customer_orders_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = parse_id("Customer", &id)?;
    let orders = customers::get_customer_orders(state.db_service.pool(), id)
        .await
        .while_("fetching customers and orders")?;
    ok_or_not_found(&orders, "No orders found for this customer.")
}
