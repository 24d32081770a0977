//! Route definitions

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{health, members, root};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::sitemap))
        .route("/health", get(health::health_check))
        .merge(member_routes())
}

/// Member collection routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members", post(members::add_member))
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id", delete(members::delete_member))
}
