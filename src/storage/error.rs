use thiserror::Error;

/// Any fault raised while executing a statement against the store.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DatabaseError>;
