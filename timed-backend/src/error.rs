// src/error.rs

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    /// ログ出力用のエラー種別
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DbErr(DbErr::RecordNotFound(_)) => "not_found",
            AppError::DbErr(_) => "database_error",
            AppError::NotFound(_) => "not_found",
            AppError::ValidationError(_) => "validation_error",
            AppError::Conflict(_) => "conflict",
        }
    }

    /// 一意制約違反は `Conflict`、それ以外は `DbErr` として扱う
    pub fn from_unique_violation(err: DbErr, conflict_message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(conflict_message.into())
            }
            _ => AppError::DbErr(err),
        }
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
