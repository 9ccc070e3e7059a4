//! Repository layer for character records.
//!
//! Records are user-edited data that change at any time; the engine reads
//! them, and only snapshot capture writes back through the service.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileCharacterRepository;
pub use memory::InMemoryCharacterRepo;
pub use traits::{CharacterRepository, validate_id};
