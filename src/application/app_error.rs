use thiserror::Error;
use waitlist_types::{ErrorCode, FieldErrors};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {message}")]
    Validation { message: String, errors: FieldErrors },

    #[error("Email is already registered")]
    AlreadyRegistered,

    #[error("Waitlist store is unavailable")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::InvalidInput,
            AppError::AlreadyRegistered => ErrorCode::AlreadyRegistered,
            AppError::StoreUnavailable => ErrorCode::StoreUnavailable,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::EmailDelivery(_) | AppError::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Errors the user can fix by changing their submission.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation { .. } | AppError::AlreadyRegistered)
    }
}

pub type AppResult<T> = Result<T, AppError>;
