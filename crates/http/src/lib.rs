//! HTTP API server for employee-registry.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use employee_registry_core::EMPLOYEES_BASE_PATH;
use employee_registry_service::EmployeeService;

pub use response_types::{ErrorResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub employee_service: Arc<EmployeeService>,
}

fn employee_routes() -> Router<Arc<AppState>> {
    use handlers::employees;

    Router::new()
        .route("/", get(employees::list_employees).post(employees::create_employee))
        .route(
            "/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route("/batch", post(employees::create_batch))
        .route("/search/email/{email}", get(employees::search_by_email))
        .route(
            "/search/firstNameContaining/{query}",
            get(employees::search_first_name_containing),
        )
        .route("/search/lastNameContaining/{query}", get(employees::search_last_name_containing))
        .route("/search/firstName/{firstName}", get(employees::search_by_first_name))
        .route("/search/fullName", get(employees::search_by_full_name))
        .route("/stats/count", get(employees::count_employees))
        .route("/stats/firstNames", get(employees::unique_first_names))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .nest(EMPLOYEES_BASE_PATH, employee_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
