//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries, plus connection pool construction and embedded migrations.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage, lookup and click accounting

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{MIGRATOR, PoolSettings, connect};
pub use sqlite_link_repository::SqliteLinkRepository;
