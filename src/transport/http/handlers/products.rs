use crate::domain::model::{
    CategoryProduct, CreatedProduct, PriceInput, PriceUpdate, Product, ProductInput,
    ProductListing,
};
use crate::storage::queries::products;
use crate::transport::http::error::{ApiError, StorageContext};
use crate::transport::http::handlers::common::{
    ok, ok_or_not_found, parse_id, respond, HandlerResult,
};
use crate::transport::http::types::{ApiResponse, AppState, DeletedProduct, NameQuery};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Products with category and manufacturer", body = ApiResponse),
        (status = 404, description = "No products", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> HandlerResult {
    let rows: Vec<ProductListing> = products::list_products(state.db_service.pool())
        .await
        .while_("fetching products")?;
    ok_or_not_found(&rows, "No products found.")
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = ApiResponse),
        (status = 400, description = "Id is not an integer", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = parse_id("Product", &id)?;
    let product: Product = products::get_product_by_id(state.db_service.pool(), id)
        .await
        .while_("fetching products by id")?
        .ok_or_else(|| ApiError::not_found("Product not found."))?;
    ok(&product)
}

#[utoipa::path(
    get,
    path = "/product/search",
    params(NameQuery),
    responses(
        (status = 200, description = "Products whose name contains the term", body = ApiResponse),
        (status = 400, description = "Missing search term", body = ApiResponse),
        (status = 404, description = "No matches", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn search_products_by_name_handler(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> HandlerResult {
    let term = query
        .name
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("Search parameter 'name' is required.".to_string()))?;

    let rows = products::search_products_by_name(state.db_service.pool(), term)
        .await
        .while_("searching for products")?;
    ok_or_not_found(&rows, &format!("No products match '{}'.", term))
}

#[utoipa::path(
    get,
    path = "/products/category/{category_id}",
    params(("category_id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Products in the category", body = ApiResponse),
        (status = 400, description = "Id is not an integer", body = ApiResponse),
        (status = 404, description = "No products in the category", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn products_by_category_handler(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> HandlerResult {
    let category_id = parse_id("Category", &category_id)?;
    let rows: Vec<CategoryProduct> =
        products::get_products_by_category(state.db_service.pool(), category_id)
            .await
            .while_("fetching products by category")?;
    ok_or_not_found(&rows, "No products found in this category.")
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ApiResponse),
        (status = 400, description = "Validation failed or unknown manufacturer/category", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<ProductInput>, JsonRejection>,
) -> HandlerResult {
    let Json(input) = request?;
    let product = input.validate()?;
    let pool = state.db_service.pool();

    if let Some(manufacturer_id) = product.manufacturer_id {
        if !products::manufacturer_exists(pool, manufacturer_id)
            .await
            .while_("creating the product")?
        {
            return Err(ApiError::Validation(format!(
                "Manufacturer {} does not exist.",
                manufacturer_id
            )));
        }
    }
    if let Some(category_id) = product.category_id {
        if !products::category_exists(pool, category_id)
            .await
            .while_("creating the product")?
        {
            return Err(ApiError::Validation(format!(
                "Category {} does not exist.",
                category_id
            )));
        }
    }

    let product_id = products::add_product(pool, &product)
        .await
        .while_("creating the product")?;
    tracing::info!(product_id, name = %product.name, "product created");

    let created = CreatedProduct::new(product_id, product);
    respond(StatusCode::CREATED, Some("Product has been created."), &created)
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = PriceInput,
    responses(
        (status = 200, description = "Price updated", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn update_product_price_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<PriceInput>, JsonRejection>,
) -> HandlerResult {
    let id = parse_id("Product", &id)?;
    let Json(input) = request?;
    let price = input.validate()?;

    let updated: PriceUpdate = products::update_product_price(state.db_service.pool(), id, price)
        .await
        .while_("updating the product")?
        .ok_or_else(|| ApiError::not_found("Product not found."))?;
    tracing::info!(product_id = id, price, "product price updated");

    respond(StatusCode::OK, Some("Product price has been updated."), &updated)
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse),
        (status = 400, description = "Id is not an integer", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let id = parse_id("Product", &id)?;
    let pool = state.db_service.pool();

    if products::get_product_by_id(pool, id)
        .await
        .while_("deleting product")?
        .is_none()
    {
        return Err(ApiError::not_found("Product not found."));
    }

    let rows_deleted = products::delete_product(pool, id)
        .await
        .while_("deleting product")?;
    tracing::info!(product_id = id, "product deleted");

    respond(
        StatusCode::OK,
        Some("Product has been deleted."),
        &DeletedProduct {
            product_id: id,
            rows_deleted,
        },
    )
}
