//! REST API layer for the phonebook service.
//!
//! Translates HTTP requests into [`ContactRepository`] operations and maps
//! results and errors to status codes. Handlers are stateless; the shared
//! repository is injected through [`AppState`] at startup.

mod error;
mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use dialbook_core::ContactRepository;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact storage, shared across requests.
    pub(crate) contacts: Arc<ContactRepository>,
}

impl AppState {
    /// Create application state owning the given repository.
    #[must_use]
    pub fn new(contacts: ContactRepository) -> Self {
        Self {
            contacts: Arc::new(contacts),
        }
    }
}

/// Build the application router.
///
/// The static `/search` segment is registered alongside the `{id}` capture;
/// axum resolves static segments first, so `search` is never parsed as an ID.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route("/api/contacts/search", get(handlers::search_contacts))
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
