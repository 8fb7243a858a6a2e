use crate::domain::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `customers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub customer_id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One order line of a customer, flattened across customer, order, order detail, product
/// and shipping method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CustomerOrderLine {
    pub customer_id: i64,
    pub customer_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub order_id: i64,
    pub order_date: Option<String>,
    pub shipping_method_id: Option<i64>,
    pub shipping_method: Option<String>,
    pub product_id: i64,
    pub product_name: Option<String>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: Option<String>,
    pub shipping_method_id: Option<i64>,
}

/// Validated contact details. `name` is left untouched when `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Body of `PUT /customers/:id`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CustomerInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

fn filled(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl CustomerInput {
    pub fn validate(self) -> Result<CustomerUpdate, ValidationError> {
        let (address, email, phone) =
            match (filled(self.address), filled(self.email), filled(self.phone)) {
                (Some(a), Some(e), Some(p)) => (a, e, p),
                _ => {
                    return Err(ValidationError::new(
                        "Address, email, and phone are required to proceed.",
                    ))
                }
            };

        if !validate::is_valid_email(&email) {
            return Err(ValidationError::new(
                "The email address must be valid and correctly formatted.",
            ));
        }

        Ok(CustomerUpdate {
            name: filled(self.name),
            address,
            email,
            phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(address: &str, email: &str, phone: &str) -> CustomerInput {
        CustomerInput {
            name: None,
            address: Some(address.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    #[test]
    fn valid_update() {
        let u = input("Storgatan 1", "kund@example.se", "070-1234567")
            .validate()
            .unwrap();
        assert_eq!(u.email, "kund@example.se");
        assert_eq!(u.name, None);
    }

    #[test]
    fn missing_contact_field() {
        let err = input("Storgatan 1", "kund@example.se", " ").validate().unwrap_err();
        assert_eq!(err.to_string(), "Address, email, and phone are required to proceed.");
    }

    #[test]
    fn malformed_email() {
        let err = input("Storgatan 1", "not-an-email", "070").validate().unwrap_err();
        assert!(err.to_string().starts_with("The email address must be valid"));
    }
}
