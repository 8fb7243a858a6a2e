use crate::domain::validate::{self, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub product_id: i64,
    pub manufacturer_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
}

/// Product joined flat with its category and manufacturer names.
///
/// A product in several categories appears once per category; an uncategorised product
/// appears once with `category_name: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductListing {
    pub product_id: i64,
    pub product_name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_name: Option<String>,
    pub manufacturer_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CategoryProduct {
    pub product_id: i64,
    pub product_name: String,
    pub category_id: i64,
    pub category_name: String,
}

/// Result row of the combined name/category search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProductMatch {
    pub product_id: i64,
    pub product_name: String,
    pub category_name: String,
}

/// A validated product ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub manufacturer_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

/// Echo of an inserted product, including the generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedProduct {
    pub product_id: i64,
    pub manufacturer_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

impl CreatedProduct {
    pub fn new(product_id: i64, product: NewProduct) -> Self {
        Self {
            product_id,
            manufacturer_id: product.manufacturer_id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceUpdate {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
}

/// Body of `POST /products` as sent by the client.
///
/// Numeric fields are kept loose (`29.99` and `"29.99"` are both accepted) and checked by
/// [`ProductInput::validate`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductInput {
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub manufacturer_id: Option<JsonValue>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = i64)]
    pub stock: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<JsonValue>,
}

impl ProductInput {
    pub fn validate(self) -> Result<NewProduct, ValidationError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let (name, price, stock) = match (name, present(self.price), present(self.stock)) {
            (Some(n), Some(p), Some(s)) => (n, p, s),
            _ => {
                return Err(ValidationError::new(
                    "Name, price and stock are required to proceed.",
                ))
            }
        };

        let price = validate::positive_price(Some(&price))?;
        let stock = validate::stock(&stock)?;
        let manufacturer_id = present(self.manufacturer_id)
            .map(|v| validate::integer("manufacturer_id", &v))
            .transpose()?;
        let category_id = present(self.category_id)
            .map(|v| validate::integer("category_id", &v))
            .transpose()?;

        Ok(NewProduct {
            manufacturer_id,
            name,
            description: self.description,
            price,
            stock,
            category_id,
        })
    }
}

/// Body of `PUT /products/:id`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PriceInput {
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price: Option<JsonValue>,
}

impl PriceInput {
    pub fn validate(&self) -> Result<f64, ValidationError> {
        validate::positive_price(self.price.as_ref())
    }
}

fn present(v: Option<JsonValue>) -> Option<JsonValue> {
    v.filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(body: JsonValue) -> ProductInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_complete_product() {
        let p = input(json!({
            "manufacturer_id": 1, "name": "Mouse", "description": "Wireless",
            "price": 29.99, "stock": 10, "category_id": 2
        }))
        .validate()
        .unwrap();
        assert_eq!(p.name, "Mouse");
        assert_eq!(p.price, 29.99);
        assert_eq!(p.stock, 10);
        assert_eq!(p.manufacturer_id, Some(1));
        assert_eq!(p.category_id, Some(2));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let p = input(json!({"name": "Cable", "price": "4.50", "stock": "0"}))
            .validate()
            .unwrap();
        assert_eq!(p.price, 4.5);
        assert_eq!(p.stock, 0);
        assert_eq!(p.category_id, None);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        for body in [
            json!({"price": 1, "stock": 1}),
            json!({"name": "  ", "price": 1, "stock": 1}),
            json!({"name": "x", "stock": 1}),
            json!({"name": "x", "price": 1, "stock": null}),
        ] {
            let err = input(body).validate().unwrap_err();
            assert!(err.to_string().contains("required"), "{}", err);
        }
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = input(json!({"name": "x", "price": -5, "stock": 1}))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Price must be greater than 0.");
    }

    #[test]
    fn bad_stock_is_rejected() {
        let err = input(json!({"name": "x", "price": 1, "stock": -1}))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Stock cannot be negative.");
        let err = input(json!({"name": "x", "price": 1, "stock": 1.5}))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Stock must be a whole number.");
    }

    #[test]
    fn non_integer_category_is_rejected() {
        let err = input(json!({"name": "x", "price": 1, "stock": 1, "category_id": "abc"}))
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "category_id must be an integer.");
    }

    #[test]
    fn price_input_rules() {
        let ok = PriceInput { price: Some(json!(12)) };
        assert_eq!(ok.validate().unwrap(), 12.0);
        let zero = PriceInput { price: Some(json!(0)) };
        assert_eq!(zero.validate().unwrap_err().to_string(), "Price must be greater than 0.");
        let text = PriceInput { price: Some(json!("cheap")) };
        assert_eq!(text.validate().unwrap_err().to_string(), "Price must be a number.");
        assert!(PriceInput::default().validate().is_err());
    }
}
