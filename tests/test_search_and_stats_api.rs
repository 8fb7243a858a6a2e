//! Combined search, aggregate reports, health and the storage-failure path.

mod common;

use common::TestServer;
use serde_json::Value;

fn rows(body: &Value) -> &Vec<Value> {
    body["data"].as_array().unwrap()
}

#[tokio::test]
async fn search_by_name_only_filters_by_name() {
    let srv = TestServer::start().await;

    let (status, body) = srv.get("/search/products?name=gaming").await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Product search was successful.");
    let found = rows(&body);
    // one row per category of Gaming Mouse
    assert_eq!(found.len(), 2);
    assert!(found
        .iter()
        .all(|r| r["product_name"].as_str().unwrap().to_lowercase().contains("gaming")));
}

#[tokio::test]
async fn search_by_category_only_filters_by_category() {
    let srv = TestServer::start().await;

    let (status, body) = srv.get("/search/products?category=electronics").await;
    assert_eq!(status, 200);
    let found = rows(&body);
    let ids: Vec<i64> = found.iter().map(|r| r["product_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![2, 4]);
    assert!(found.iter().all(|r| r["category_name"] == "Electronics"));
}

#[tokio::test]
async fn search_with_both_terms_is_conjunctive() {
    let srv = TestServer::start().await;

    let (status, body) = srv.get("/search/products?name=mouse&category=access").await;
    assert_eq!(status, 200);
    let found = rows(&body);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["product_id"], 1);
    assert_eq!(found[0]["category_name"], "Accessories");

    let (status, body) = srv.get("/search/products?name=mouse&category=electronics").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "No products match the provided name and category.");
}

#[tokio::test]
async fn search_without_terms_is_rejected() {
    let srv = TestServer::start().await;

    let (status, _) = srv.get("/search/products").await;
    assert_eq!(status, 400);
    let (status, _) = srv.get("/search/products?name=&category=%20").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn product_stats_per_category() {
    let srv = TestServer::start().await;

    let (status, body) = srv.get("/product/stats").await;
    assert_eq!(status, 200);
    let stats = rows(&body);
    assert_eq!(stats.len(), 3);

    assert_eq!(stats[0]["category_name"], "Accessories");
    assert_eq!(stats[0]["total_products"], 2);
    assert_eq!(stats[0]["average_price"], 699.0);

    assert_eq!(stats[1]["category_name"], "Electronics");
    assert_eq!(stats[1]["total_products"], 2);
    assert_eq!(stats[1]["average_price"], 3649.25);

    assert_eq!(stats[2]["category_name"], "Gaming");
    assert_eq!(stats[2]["average_price"], 3249.0);
}

#[tokio::test]
async fn product_stats_round_to_two_decimals() {
    let srv = TestServer::start().await;
    sqlx::query("UPDATE products SET price = 10.005 WHERE product_id = 1")
        .execute(&srv.pool)
        .await
        .unwrap();
    sqlx::query("UPDATE products SET price = 10.0 WHERE product_id = 3")
        .execute(&srv.pool)
        .await
        .unwrap();

    let (_, body) = srv.get("/product/stats").await;
    let accessories = &rows(&body)[0];
    assert_eq!(accessories["category_name"], "Accessories");
    assert_eq!(accessories["average_price"], 10.0);
}

#[tokio::test]
async fn product_stats_merge_categories_with_the_same_name() {
    let srv = TestServer::start().await;
    sqlx::query("INSERT INTO categories (category_id, name) VALUES (5, 'Gaming')")
        .execute(&srv.pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO products_categories (product_id, category_id) VALUES (3, 5)")
        .execute(&srv.pool)
        .await
        .unwrap();

    let (status, body) = srv.get("/product/stats").await;
    assert_eq!(status, 200);
    let stats = rows(&body);
    assert_eq!(stats.len(), 3);
    let gaming = stats.iter().find(|r| r["category_name"] == "Gaming").unwrap();
    assert_eq!(gaming["total_products"], 3);
    assert_eq!(gaming["average_price"], 2465.67);
}

#[tokio::test]
async fn review_stats_per_product() {
    let srv = TestServer::start().await;

    let (status, body) = srv.get("/reviews/stats").await;
    assert_eq!(status, 200);
    let stats = rows(&body);
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0]["product_name"], "Gaming Mouse");
    assert_eq!(stats[0]["average_rating"], 4.5);
    assert_eq!(stats[1]["average_rating"], 5.0);
    assert_eq!(stats[2]["product_id"], 4);
    assert_eq!(stats[2]["average_rating"], 3.0);

    sqlx::query("DELETE FROM reviews").execute(&srv.pool).await.unwrap();
    let (status, body) = srv.get("/reviews/stats").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "No reviews found.");
}

#[tokio::test]
async fn health_reports_ok() {
    let srv = TestServer::start().await;

    let (status, body) = srv.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn storage_failures_surface_as_generic_500() {
    let srv = TestServer::start().await;
    srv.pool.close().await;

    let (status, body) = srv.get("/products").await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Something went wrong while fetching products. Try again later!"
    );

    let (status, _) = srv.get("/health").await;
    assert_eq!(status, 503);
}
