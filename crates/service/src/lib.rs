//! Service layer for users and financial entries.
//! - Store contracts are traits; SeaORM and in-memory implementations live under `repo`.
//! - Business rules (authentication, email uniqueness, entry validation) live in the services.

pub mod errors;
pub mod repository;
pub mod password;
pub mod user;
pub mod entry;
#[cfg(test)]
pub mod test_support;

pub use entry::EntryService;
pub use errors::{ServiceError, StoreError};
pub use password::PasswordEncoder;
pub use repository::Repository;
pub use user::UserService;
