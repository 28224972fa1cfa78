//! Keyed databases
//!
//! A [`Database`] is a list of elements with unique string ids plus an index
//! for O(1) lookup. Databases are usually authored as RON or TOML files and
//! collected by element type in a [`DatabaseManager`].

pub mod manager;
pub mod store;

pub use manager::{AnyDatabase, DatabaseManager};
pub use store::{validate_unique_ids, Database, DatabaseElement};

use crate::config::ConfigError;
use thiserror::Error;

/// Database errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Several elements share an id
    #[error("Duplicate database ids: {}", .0.join(", "))]
    DuplicateIds(Vec<String>),

    /// A database for this element type is already registered
    #[error("Database for {0} is already registered")]
    AlreadyRegistered(&'static str),

    /// The database file could not be read or parsed
    #[error("Failed to load database: {0}")]
    Config(#[from] ConfigError),
}
