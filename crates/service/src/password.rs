use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use configs::PasswordEncoding;
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// Turns a raw password into its stored form and checks candidates against it.
///
/// `Plain` keeps the password as given and compares by exact equality.
/// `Argon2` stores a PHC string with a random salt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordEncoder {
    encoding: PasswordEncoding,
}

impl PasswordEncoder {
    pub fn new(encoding: PasswordEncoding) -> Self { Self { encoding } }

    pub fn plain() -> Self { Self::new(PasswordEncoding::Plain) }

    pub fn argon2() -> Self { Self::new(PasswordEncoding::Argon2) }

    pub fn encoding(&self) -> PasswordEncoding { self.encoding }

    pub fn encode(&self, raw: &str) -> Result<String, ServiceError> {
        match self.encoding {
            PasswordEncoding::Plain => Ok(raw.to_string()),
            PasswordEncoding::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(raw.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| ServiceError::PasswordEncoding(e.to_string()))
            }
        }
    }

    pub fn matches(&self, raw: &str, stored: &str) -> bool {
        match self.encoding {
            PasswordEncoding::Plain => raw == stored,
            PasswordEncoding::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default().verify_password(raw.as_bytes(), &parsed).is_ok(),
                // a stored value that is not a PHC string never matches
                Err(_) => false,
            },
        }
    }
}
