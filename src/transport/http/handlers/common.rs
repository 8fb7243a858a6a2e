use crate::domain::validate;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type HandlerResult = Result<Response, ApiError>;

/// Wraps `data` in a success envelope.
pub fn respond<T: Serialize + ?Sized>(
    status: StatusCode,
    message: Option<&str>,
    data: &T,
) -> HandlerResult {
    let data = serde_json::to_value(data)?;
    Ok((
        status,
        Json(ApiResponse::ok(message.map(str::to_string), data)),
    )
        .into_response())
}

pub fn ok<T: Serialize + ?Sized>(data: &T) -> HandlerResult {
    respond(StatusCode::OK, None, data)
}

/// 404 with `msg` when the result set is empty, otherwise 200.
pub fn ok_or_not_found<T: Serialize>(rows: &[T], msg: &str) -> HandlerResult {
    if rows.is_empty() {
        return Err(ApiError::not_found(msg));
    }
    ok(rows)
}

pub fn parse_id(kind: &str, raw: &str) -> Result<i64, ApiError> {
    Ok(validate::id(kind, raw)?)
}
