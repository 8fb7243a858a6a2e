use crate::app::database_service::DatabaseService;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub db_service: Arc<DatabaseService>,
}

impl AppState {
    pub fn new(db_service: DatabaseService) -> Self {
        Self {
            db_service: Arc::new(db_service),
        }
    }
}

/// Envelope for every response body.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(message: Option<String>, data: JsonValue) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// `?name=` for the single-term product search.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NameQuery {
    /// Substring of the product name.
    pub name: Option<String>,
}

/// `?name=&category=` for the combined search. At least one must be non-blank.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring of the product name.
    pub name: Option<String>,
    /// Substring of the category name.
    pub category: Option<String>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeletedProduct {
    pub product_id: i64,
    pub rows_deleted: u64,
}
