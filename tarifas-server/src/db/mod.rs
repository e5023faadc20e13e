//! Database access: connection management and per-entity repositories.

pub mod manager;
pub mod repos;

pub use manager::ConnectionManager;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i32 },
}
