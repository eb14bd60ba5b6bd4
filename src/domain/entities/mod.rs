//! Core domain entities representing the business data model.
//!
//! The service has a single persisted entity, [`Link`]. Creation input is kept
//! in its own struct, [`NewLink`], so that store-assigned state (the click
//! counter) can never be supplied by a caller.

pub mod link;

pub use link::{Link, NewLink};
