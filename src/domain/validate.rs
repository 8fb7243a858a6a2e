//! Input checks applied at the HTTP boundary before any statement runs.

use regex::Regex;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;
use thiserror::Error;

/// A rejected input. The message is shown to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Reads a JSON number or a numeric string as `f64`. Non-finite values are rejected.
pub fn number(v: &JsonValue) -> Option<f64> {
    let n = match v {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

pub fn positive_price(v: Option<&JsonValue>) -> Result<f64, ValidationError> {
    let price = v
        .and_then(number)
        .ok_or_else(|| ValidationError::new("Price must be a number."))?;
    if price <= 0.0 {
        return Err(ValidationError::new("Price must be greater than 0."));
    }
    Ok(price)
}

pub fn stock(v: &JsonValue) -> Result<i64, ValidationError> {
    let n = whole_number(v).ok_or_else(|| ValidationError::new("Stock must be a whole number."))?;
    if n < 0 {
        return Err(ValidationError::new("Stock cannot be negative."));
    }
    Ok(n)
}

pub fn integer(field: &str, v: &JsonValue) -> Result<i64, ValidationError> {
    whole_number(v).ok_or_else(|| ValidationError::new(format!("{} must be an integer.", field)))
}

fn whole_number(v: &JsonValue) -> Option<i64> {
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    if let Some(s) = v.as_str() {
        return s.trim().parse::<i64>().ok();
    }
    let f = v.as_f64()?;
    (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Parses a path segment naming a row id.
pub fn id(kind: &str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new(format!("{} id must be an integer.", kind)))
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
            .expect("email pattern must compile")
    })
}

/// `local@domain.tld`, where the top-level domain is 2–6 letters.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}
