//! Domain layer containing business entities and storage contracts.
//!
//! This module is independent of infrastructure concerns: it defines what a
//! link is and what a link store must guarantee, not how either is stored.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and their error type
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the HTTP or persistence layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
