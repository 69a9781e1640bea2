use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return ModelError::UniqueViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return ModelError::ForeignKeyViolation(msg),
            _ => {}
        }
        match err {
            DbErr::RecordNotFound(msg) => ModelError::NotFound(msg),
            DbErr::RecordNotUpdated => ModelError::NotFound("no row matched the update".into()),
            other => ModelError::Db(other.to_string()),
        }
    }
}
