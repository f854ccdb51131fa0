use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde_json::json;

use campus_core::{ClassroomId, TenantId};

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::CallerContext;

pub fn router() -> Router {
    Router::new()
        .route("/:tenant_id", post(create_classroom))
        .route(
            "/:tenant_id/:classroom_id",
            get(get_classroom).patch(add_member).delete(remove_member),
        )
        .route("/:tenant_id/:classroom_id/content", patch(set_content))
        .route("/:tenant_id/:classroom_id/forum", post(post_to_forum))
        .route(
            "/:tenant_id/:classroom_id/schedule",
            post(create_schedule_event),
        )
}

/// Create a classroom. Admin-only (tenant or super admin).
pub async fn create_classroom(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(tenant_id): Path<TenantId>,
    Json(body): Json<dto::CreateClassroomRequest>,
) -> axum::response::Response {
    let (Some(name), Some(teacher_id)) = (body.name, body.teacher_id) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "classroom name and teacher are required",
        );
    };

    match services
        .classrooms
        .create_classroom(&caller.caller(), tenant_id, name, teacher_id)
        .await
    {
        Ok(classroom) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "classroom created",
                "classroom": classroom,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Get a classroom with role-gated field visibility (students do not see
/// the student roster).
pub async fn get_classroom(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path((tenant_id, classroom_id)): Path<(TenantId, ClassroomId)>,
) -> axum::response::Response {
    match services
        .classrooms
        .get_classroom(&caller.caller(), tenant_id, classroom_id)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Add a student or teacher to the classroom roster.
pub async fn add_member(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path((tenant_id, classroom_id)): Path<(TenantId, ClassroomId)>,
    Json(body): Json<dto::MemberRequest>,
) -> axum::response::Response {
    match services
        .classrooms
        .add_member(
            &caller.caller(),
            tenant_id,
            classroom_id,
            body.student_id,
            body.teacher_id,
        )
        .await
    {
        Ok(kind) => (
            StatusCode::OK,
            Json(json!({ "message": format!("{kind} added") })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Remove a student or teacher from the classroom roster.
pub async fn remove_member(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path((tenant_id, classroom_id)): Path<(TenantId, ClassroomId)>,
    Json(body): Json<dto::MemberRequest>,
) -> axum::response::Response {
    match services
        .classrooms
        .remove_member(
            &caller.caller(),
            tenant_id,
            classroom_id,
            body.student_id,
            body.teacher_id,
        )
        .await
    {
        Ok(kind) => (
            StatusCode::OK,
            Json(json!({ "message": format!("{kind} removed") })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Overwrite classroom content. Teacher or admin.
pub async fn set_content(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path((tenant_id, classroom_id)): Path<(TenantId, ClassroomId)>,
    Json(body): Json<dto::ContentRequest>,
) -> axum::response::Response {
    let Some(content) = body.content else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "content is required",
        );
    };

    match services
        .classrooms
        .set_content(&caller.caller(), tenant_id, classroom_id, content)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "content modified" })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Append a forum post. Viewer-level access (students included).
pub async fn post_to_forum(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path((tenant_id, classroom_id)): Path<(TenantId, ClassroomId)>,
    Json(body): Json<dto::ContentRequest>,
) -> axum::response::Response {
    let Some(content) = body.content else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "content is required",
        );
    };

    match services
        .classrooms
        .post_to_forum(&caller.caller(), tenant_id, classroom_id, content)
        .await
    {
        Ok(post) => (
            StatusCode::OK,
            Json(json!({
                "message": "post created",
                "post": post,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// Create a (possibly recurring) schedule event via the scheduling service.
pub async fn create_schedule_event(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path((tenant_id, classroom_id)): Path<(TenantId, ClassroomId)>,
    Json(body): Json<dto::ScheduleEventRequest>,
) -> axum::response::Response {
    let (Some(start), Some(end), Some(frequency)) = (body.start, body.end, body.frequency) else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "start, end and frequency are required",
        );
    };

    match services
        .classrooms
        .create_schedule_event(
            &caller.caller(),
            tenant_id,
            classroom_id,
            &start,
            &end,
            &frequency,
            body.repeat_until.as_deref(),
        )
        .await
    {
        Ok(spec) => (
            StatusCode::OK,
            Json(json!({
                "message": "event added",
                "spec": spec,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
