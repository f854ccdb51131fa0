use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use campus_classrooms::RecurrenceSpec;
use campus_core::{ClassroomId, TenantId};

/// Fully-resolved event creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEvent {
    pub tenant_id: TenantId,
    pub classroom_id: ClassroomId,
    pub spec: RecurrenceSpec,
}

/// Structured failure reported by the scheduling service.
///
/// `detail` carries the collaborator's own error payload; it is echoed back
/// to API callers for diagnostics, never interpreted here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("scheduling service error: {message}")]
pub struct ScheduleError {
    pub message: String,
    pub detail: Option<JsonValue>,
}

/// Scheduling Service port.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    async fn create_event(&self, request: CreateEvent) -> Result<(), ScheduleError>;
}
