use axum::{Router, routing::get};

pub mod classroom;
pub mod classrooms;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/classroom", classroom::router())
        .nest("/classrooms", classrooms::router())
}
