//! Data-access layer: one function per parameterized statement (or short fixed sequence).

pub mod error;
pub mod filter;
pub mod queries;

pub use error::DatabaseError;
pub use filter::{Predicate, ProductFilter};
