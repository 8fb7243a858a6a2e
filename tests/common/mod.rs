//! Shared harness: a seeded SQLite file in a temp dir and the router on an ephemeral port.
#![allow(dead_code)]

use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, Executor, SqlitePool};
use std::sync::Arc;
use techgear_api::{transport, DatabaseService};
use tempfile::TempDir;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub pool: SqlitePool,
    pub db: Arc<DatabaseService>,
    server: tokio::task::JoinHandle<()>,
    _dir: TempDir,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with_schema(SCHEMA).await
    }

    /// Same data, but `products.price` declared `DECIMAL(10,2)` (NUMERIC affinity), which
    /// stores whole prices as INTEGER.
    pub async fn start_with_decimal_prices() -> Self {
        let schema = SCHEMA.replace("price REAL NOT NULL", "price DECIMAL(10,2) NOT NULL");
        assert_ne!(schema, SCHEMA);
        Self::start_with_schema(&schema).await
    }

    pub async fn start_with_schema(schema: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("techgear.db");

        let mut conn = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();
        conn.execute(schema).await.unwrap();
        conn.close().await.unwrap();

        let db_service = DatabaseService::connect(db_path.to_str().unwrap())
            .await
            .unwrap();
        let state = transport::http::AppState::new(db_service);
        let pool = state.db_service.pool().clone();
        let db = state.db_service.clone();
        let router = transport::http::create_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            pool,
            db,
            server,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        read(resp).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self.client.post(self.url(path)).json(body).send().await.unwrap();
        read(resp).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> (u16, Value) {
        let resp = self.client.put(self.url(path)).json(body).send().await.unwrap();
        read(resp).await
    }

    pub async fn delete(&self, path: &str) -> (u16, Value) {
        let resp = self.client.delete(self.url(path)).send().await.unwrap();
        read(resp).await
    }

    pub async fn count(&self, sql: &str) -> i64 {
        sqlx::query_scalar(sql).fetch_one(&self.pool).await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn read(resp: reqwest::Response) -> (u16, Value) {
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}
