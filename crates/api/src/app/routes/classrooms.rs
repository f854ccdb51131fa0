use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use campus_core::TenantId;

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CallerContext;

pub fn router() -> Router {
    Router::new().route("/:tenant_id", get(list_classrooms))
}

/// List classrooms in a tenant. Admins see every record with rosters;
/// everyone else sees id+name of classrooms they belong to.
pub async fn list_classrooms(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(tenant_id): Path<TenantId>,
) -> axum::response::Response {
    match services
        .classrooms
        .list_classrooms(&caller.caller(), tenant_id)
        .await
    {
        Ok(listing) => (StatusCode::OK, Json(listing)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
