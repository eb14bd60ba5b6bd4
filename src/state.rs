//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// Link service as wired for the running server.
pub type AppLinkService = LinkService<SqliteLinkRepository, RandomCodeGenerator>;

/// State shared by all handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    /// Public address short links are formed from, e.g. `https://s.example.com`.
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, base_url: impl Into<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.into(),
        }
    }
}
