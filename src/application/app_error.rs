use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("A record with this email already exists")]
    DuplicateEntry,

    #[error("Write was not acknowledged by the store")]
    Unacknowledged,
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    DatabaseError,
    DuplicateEntry,
    Unacknowledged,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DuplicateEntry => "DUPLICATE_ENTRY",
            ErrorCode::Unacknowledged => "UNACKNOWLEDGED_WRITE",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
