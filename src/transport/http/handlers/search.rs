use crate::domain::model::ProductMatch;
use crate::storage::queries::products;
use crate::storage::ProductFilter;
use crate::transport::http::error::{ApiError, StorageContext};
use crate::transport::http::handlers::common::{respond, HandlerResult};
use crate::transport::http::types::{ApiResponse, AppState, SearchQuery};
use axum::extract::{Query, State};
use axum::http::StatusCode;

/// Either term may be omitted; only the supplied ones constrain the result.
#[utoipa::path(
    get,
    path = "/search/products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse),
        (status = 400, description = "Neither name nor category given", body = ApiResponse),
        (status = 404, description = "No matches", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn search_products_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult {
    let filter = ProductFilter::new()
        .name(query.name.as_deref())
        .category(query.category.as_deref());
    if filter.is_empty() {
        return Err(ApiError::Validation(
            "Provide a name and/or a category to search for.".to_string(),
        ));
    }

    let rows: Vec<ProductMatch> =
        products::search_products_by_name_and_category(state.db_service.pool(), &filter)
            .await
            .while_("fetching products")?;
    if rows.is_empty() {
        return Err(ApiError::not_found(
            "No products match the provided name and category.",
        ));
    }

    respond(StatusCode::OK, Some("Product search was successful."), &rows)
}
