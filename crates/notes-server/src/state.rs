//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteService;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Constructed once at process start and cloned into each handler via
/// `State<AppState>`; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Note service over the database store.
    service: Arc<NoteService>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(service: NoteService, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note service.
    pub fn service(&self) -> &NoteService {
        &self.service
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
