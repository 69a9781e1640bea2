//! Financial entries: domain, store contract, store implementations and service.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Entry, EntryFilter, EntryStatus, EntryType};
pub use repository::EntryRepository;
pub use service::EntryService;
