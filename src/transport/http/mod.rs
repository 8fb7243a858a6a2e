pub mod error;
pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod customers;
    pub mod health;
    pub mod products;
    pub mod search;
    pub mod stats;
}

pub use error::ApiError;
pub use router::{create_router, ApiDoc};
pub use types::AppState;
