use crate::storage::queries::stats;
use crate::transport::http::error::StorageContext;
use crate::transport::http::handlers::common::{ok, ok_or_not_found, HandlerResult};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/product/stats",
    responses(
        (status = 200, description = "Product count and average price per category", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn product_stats_handler(State(state): State<AppState>) -> HandlerResult {
    let rows = stats::get_product_stats(state.db_service.pool())
        .await
        .while_("fetching product statistics")?;
    ok(&rows)
}

#[utoipa::path(
    get,
    path = "/reviews/stats",
    responses(
        (status = 200, description = "Average rating per product", body = ApiResponse),
        (status = 404, description = "No reviews", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn review_stats_handler(State(state): State<AppState>) -> HandlerResult {
    let rows = stats::get_review_stats(state.db_service.pool())
        .await
        .while_("fetching reviews")?;
    ok_or_not_found(&rows, "No reviews found.")
}
