use models::errors::ModelError;
use thiserror::Error;

/// Failures reported by a store implementation, independent of its backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Db(String),
}

impl From<ModelError> for StoreError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UniqueViolation(msg) => StoreError::UniqueViolation(msg),
            ModelError::ForeignKeyViolation(msg) => StoreError::ForeignKeyViolation(msg),
            ModelError::NotFound(msg) => StoreError::NotFound(msg),
            ModelError::Db(msg) => StoreError::Db(msg),
        }
    }
}

/// Business errors surfaced by the services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    BusinessRule(String),
    #[error("password encoding error: {0}")]
    PasswordEncoding(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn authentication(msg: impl Into<String>) -> Self { Self::Authentication(msg.into()) }

    pub fn business_rule(msg: impl Into<String>) -> Self { Self::BusinessRule(msg.into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Authentication(_) => 1001,
            ServiceError::BusinessRule(_) => 1002,
            ServiceError::PasswordEncoding(_) => 1101,
            ServiceError::Store(StoreError::NotFound(_)) => 1201,
            ServiceError::Store(_) => 1200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_kind() {
        assert_eq!(
            StoreError::from(ModelError::UniqueViolation("users.email".into())),
            StoreError::UniqueViolation("users.email".into())
        );
        assert_eq!(StoreError::from(ModelError::Db("down".into())), StoreError::Db("down".into()));
    }

    #[test]
    fn business_errors_display_their_message_only() {
        assert_eq!(ServiceError::authentication("Senha inválida").to_string(), "Senha inválida");
        assert_eq!(ServiceError::business_rule("regra").to_string(), "regra");
    }

    #[test]
    fn codes_are_distinct_per_kind() {
        assert_eq!(ServiceError::authentication("a").code(), 1001);
        assert_eq!(ServiceError::business_rule("b").code(), 1002);
        assert_eq!(ServiceError::from(StoreError::NotFound("x".into())).code(), 1201);
        assert_eq!(ServiceError::from(StoreError::Db("x".into())).code(), 1200);
    }
}
