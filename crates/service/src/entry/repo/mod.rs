pub mod memory;
pub mod seaorm;

pub use memory::InMemoryEntryRepository;
pub use seaorm::SeaOrmEntryRepository;
