pub mod activity;
pub mod booking;
pub mod member;
pub mod repository;
pub mod time_format;

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{context}: {id}")]
    NotFound { context: &'static str, id: Uuid },
    #[error("Record store error: {0}")]
    StoreError(Box<dyn std::error::Error + Send + Sync>),
}

impl CoreError {
    pub fn not_found(context: &'static str, id: Uuid) -> Self {
        CoreError::NotFound { context, id }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::StoreError(err)
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
