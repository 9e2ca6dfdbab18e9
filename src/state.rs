//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! chat responder is immutable, so sharing it is a plain `Arc` clone.

use std::sync::Arc;

use crate::services::chat::ChatResponder;

/// Clone is required by Axum. All inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatResponder>,
}

impl AppState {
    #[must_use]
    pub fn new(chat: ChatResponder) -> Self {
        Self { chat: Arc::new(chat) }
    }
}
