//! Shared application state for the Axum server.

use std::sync::Arc;

use psyche_resolver::{Resolver, TextGenerator};

/// Shared application state, cloneable into every handler.
///
/// The resolver is the only state: the archetype table is a `const` and
/// nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Situation-to-archetype resolver over the configured vendor.
    pub resolver: Arc<Resolver>,
}

impl AppState {
    /// Create state around the given generator (real vendor client in the
    /// binary, stub or wiremock-backed client in tests).
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            resolver: Arc::new(Resolver::new(generator)),
        }
    }
}
