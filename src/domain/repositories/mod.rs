//! Repository trait definitions for the domain layer.
//!
//! This module defines the storage contract that the link service is written
//! against. The concrete implementation lives in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Short link storage with atomic click accounting
//!
//! # Testing
//!
//! A `mockall` mock is generated under `cfg(test)`. See integration tests in
//! `tests/repository_link.rs` for the SQLite implementation.

pub mod link_repository;

pub use link_repository::{LinkRepository, StoreError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
