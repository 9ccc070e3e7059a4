//! Persistence and application services for the status screen tracker.
//!
//! Character records are stored one JSON document per character. The
//! [`StatusService`] loads a record, runs the `status-core` engine on it and,
//! for snapshot capture, writes the new snapshot back.
pub mod config;
pub mod repository;
pub mod service;

pub use config::StoreConfig;
pub use repository::{
    CharacterRepository, FileCharacterRepository, InMemoryCharacterRepo, RepositoryError,
};
pub use service::{CharacterStatus, ServiceError, StatusService};
