//! Document store implementations.

mod memory;

#[cfg(feature = "mongo")]
mod document;
#[cfg(feature = "mongo")]
mod mongo;

pub use memory::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "mongo")]
pub use mongo::{MongoPostRepository, MongoStore, MongoUserRepository};

/// Configuration for the document store connection.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
}
