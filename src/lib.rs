//! # shortcode
//!
//! A URL shortener built with Axum and SQLite: maps long URLs to short
//! codes, redirects on access, counts clicks and honors optional expiry.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and the storage contract
//! - **Application Layer** ([`application`]) - Short-code lifecycle: generation,
//!   collision retry, expiry evaluation, click accounting
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Link Lifecycle
//!
//! A link is *active* from creation until its optional `expires_at`, after
//! which resolves answer *expired* without counting a click. Expiry is judged
//! at read time; nothing sweeps expired rows. Only an explicit delete removes
//! a link, and its code is reserved until then.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export BASE_URL="http://localhost:3001"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkError, LinkService, Resolution};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::{LinkRepository, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
