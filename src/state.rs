//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService, ShortenSettings};
use crate::domain::clock::Clock;
use crate::domain::repositories::EntryStore;
use crate::utils::code_generator::CodeGenerator;

/// Handles to the services, built once at startup.
///
/// Both services share the same store and clock; nothing here is a
/// process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn EntryStore>>,
    pub resolve_service: Arc<ResolveService<dyn EntryStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn EntryStore>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        settings: ShortenSettings,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(
            store.clone(),
            generator,
            clock.clone(),
            settings,
        ));
        let resolve_service = Arc::new(ResolveService::new(store, clock));

        Self {
            shorten_service,
            resolve_service,
        }
    }
}
