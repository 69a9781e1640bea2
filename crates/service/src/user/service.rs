use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::User;
use super::repository::UserRepository;
use crate::errors::{ServiceError, StoreError};
use crate::password::PasswordEncoder;

pub const USER_NOT_FOUND: &str = "Usuário não encontrado para o email informado";
pub const INVALID_PASSWORD: &str = "Senha inválida";
pub const EMAIL_ALREADY_REGISTERED: &str = "Já existe usuário cadastrado com este e-mail.";

/// User business service, independent of any transport.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
    encoder: PasswordEncoder,
}

impl<R: UserRepository> UserService<R> {
    /// Service storing passwords as given.
    pub fn new(repo: Arc<R>) -> Self { Self::with_encoder(repo, PasswordEncoder::default()) }

    pub fn with_encoder(repo: Arc<R>, encoder: PasswordEncoder) -> Self { Self { repo, encoder } }

    /// Look a user up by email and check the password.
    ///
    /// # Examples
    /// ```
    /// use service::user::{User, UserService, repo::InMemoryUserRepository};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// tokio_test::block_on(svc.save(User::new("nome", "email@email.com", "senha"))).unwrap();
    /// let user = tokio_test::block_on(svc.authenticate("email@email.com", "senha")).unwrap();
    /// assert_eq!(user.name, "nome");
    /// let err = tokio_test::block_on(svc.authenticate("email@email.com", "123")).unwrap_err();
    /// assert_eq!(err.to_string(), "Senha inválida");
    /// ```
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, ServiceError> {
        let user = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::authentication(USER_NOT_FOUND))?;

        if !self.encoder.matches(password, &user.password) {
            debug!(user_id = ?user.id, "password mismatch");
            return Err(ServiceError::authentication(INVALID_PASSWORD));
        }
        Ok(user)
    }

    /// Register or update a user after checking that the email is free.
    ///
    /// # Examples
    /// ```
    /// use service::user::{User, UserService, repo::InMemoryUserRepository};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// let saved = tokio_test::block_on(svc.save(User::new("nome", "email@email.com", "senha"))).unwrap();
    /// assert_eq!(saved.id, Some(1));
    /// let dup = tokio_test::block_on(svc.save(User::new("outro", "email@email.com", "x"))).unwrap_err();
    /// assert_eq!(dup.to_string(), "Já existe usuário cadastrado com este e-mail.");
    /// ```
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn save(&self, mut user: User) -> Result<User, ServiceError> {
        self.validate_email(&user.email).await?;
        user.password = self.encoder.encode(&user.password)?;

        let saved = self.repo.save(user).await.map_err(|err| match err {
            StoreError::UniqueViolation(detail) => {
                warn!(%detail, "unique constraint rejected user");
                ServiceError::business_rule(EMAIL_ALREADY_REGISTERED)
            }
            other => ServiceError::Store(other),
        })?;
        info!(user_id = ?saved.id, email = %saved.email, event = "user_saved", "user saved");
        Ok(saved)
    }

    /// Fails with a business-rule error when the email is already taken.
    pub async fn validate_email(&self, email: &str) -> Result<(), ServiceError> {
        if self.repo.exists_by_email(email).await? {
            return Err(ServiceError::business_rule(EMAIL_ALREADY_REGISTERED));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }
}
