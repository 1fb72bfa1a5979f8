use std::sync::Arc;

use acuity_engine::Engine;

/// Shared application state, injected into route handlers via Axum state.
pub struct AppState<G> {
    pub engine: Arc<Engine<G>>,
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        AppState {
            engine: Arc::clone(&self.engine),
        }
    }
}
