//! # scribe-database
//!
//! Data store access for Scribe: the store traits the services depend on,
//! their PostgreSQL implementations, an in-process implementation, pool
//! management, and migrations.

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use repositories::{CommentStore, PostStore, RoleStore, Stores, UserStore};
