//! User module: domain, store contract, store implementations and service.
//!
//! Registration enforces email uniqueness; authentication checks email and password.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::User;
pub use repository::UserRepository;
pub use service::UserService;
