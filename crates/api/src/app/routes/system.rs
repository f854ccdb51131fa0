use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::context::CallerContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(caller): Extension<CallerContext>) -> impl IntoResponse {
    let caller = caller.caller();
    Json(serde_json::json!({
        "user_id": caller.id.to_string(),
        "super_admin": caller.super_admin,
    }))
}
