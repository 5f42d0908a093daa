//! # Ripple Infrastructure
//!
//! Concrete implementations of the ports defined in `ripple-core`:
//! the MongoDB document store, in-memory fallbacks, and JWT/Argon2
//! authentication services.
//!
//! ## Feature Flags
//!
//! - `mongo` (default) - MongoDB document store support

pub mod auth;
pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};

pub use auth::{Argon2PasswordService, JwtTokenService};

// Re-exports - MongoDB
#[cfg(feature = "mongo")]
pub use database::{MongoPostRepository, MongoStore, MongoUserRepository};
