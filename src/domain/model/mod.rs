//! Row and payload types for the shop schema.

pub mod customer;
pub mod product;
pub mod stats;

pub use customer::{Customer, CustomerInput, CustomerOrderLine, CustomerUpdate, Order};
pub use product::{
    CategoryProduct, CreatedProduct, NewProduct, PriceInput, PriceUpdate, Product, ProductInput,
    ProductListing, ProductMatch,
};
pub use stats::{CategoryStats, ReviewStats};
