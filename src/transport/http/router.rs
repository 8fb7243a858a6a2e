use crate::domain::model::{
    CategoryProduct, CategoryStats, CreatedProduct, Customer, CustomerInput, CustomerOrderLine,
    Order, PriceInput, PriceUpdate, Product, ProductInput, ProductListing, ProductMatch,
    ReviewStats,
};
use crate::transport::http::handlers::{customers, health, products, search, stats};
use crate::transport::http::types::{ApiResponse, AppState, DeletedProduct};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::search_products_by_name_handler,
        products::products_by_category_handler,
        products::create_product_handler,
        products::update_product_price_handler,
        products::delete_product_handler,
        customers::get_customer_handler,
        customers::update_customer_handler,
        customers::customer_orders_handler,
        stats::product_stats_handler,
        stats::review_stats_handler,
        search::search_products_handler
    ),
    components(schemas(
        ApiResponse,
        Product,
        ProductListing,
        CategoryProduct,
        ProductMatch,
        ProductInput,
        CreatedProduct,
        PriceInput,
        PriceUpdate,
        DeletedProduct,
        Customer,
        CustomerInput,
        CustomerOrderLine,
        Order,
        CategoryStats,
        ReviewStats
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_price_handler)
                .delete(products::delete_product_handler),
        )
        .route(
            "/products/category/:category_id",
            get(products::products_by_category_handler),
        )
        .route("/product/search", get(products::search_products_by_name_handler))
        .route("/product/stats", get(stats::product_stats_handler))
        .route(
            "/customers/:id",
            get(customers::get_customer_handler).put(customers::update_customer_handler),
        )
        .route("/customers/:id/orders", get(customers::customer_orders_handler))
        .route("/reviews/stats", get(stats::review_stats_handler))
        .route("/search/products", get(search::search_products_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
