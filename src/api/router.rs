use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, borrow_item, get_user_balance, pay_fine, register_user, return_item, run_reminders,
    unregister_user,
};

/// Creates the API router with all lending endpoints
///
/// Command endpoints (Write operations):
/// - POST /users - Register a user
/// - DELETE /users/:id - Unregister a user
/// - POST /loans - Borrow an item
/// - POST /loans/:id/return - Return an item
/// - POST /fines/:id/pay - Pay a fine
/// - POST /reminders - Run the overdue reminder batch
///
/// Query endpoints (Read operations):
/// - GET /users/:id/balance - Outstanding balance
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Users
        .route("/users", post(register_user))
        .route("/users/:id", delete(unregister_user))
        .route("/users/:id/balance", get(get_user_balance))
        // Loans
        .route("/loans", post(borrow_item))
        .route("/loans/:id/return", post(return_item))
        // Fines
        .route("/fines/:id/pay", post(pay_fine))
        // Reminders
        .route("/reminders", post(run_reminders))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
