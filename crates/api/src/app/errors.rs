use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use campus_infra::ServiceError;

/// Map a service failure onto the API error taxonomy.
///
/// Upstream failures echo the collaborator's error payload under `detail`
/// for diagnostics; everything else is a short human-readable message.
pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Forbidden => json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
        ServiceError::NotFound(what) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{what} not found"))
        }
        ServiceError::Validation(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        ServiceError::Upstream { message, detail } => {
            let mut body = json!({
                "error": "upstream_error",
                "message": message,
            });
            if let Some(detail) = detail {
                body["detail"] = detail;
            }
            (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
