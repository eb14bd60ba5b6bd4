//! Business logic services for the application layer.

pub mod link_service;

pub use link_service::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RECENT_LIMIT, LinkError, LinkService, MAX_RECENT_LIMIT,
    Resolution,
};
