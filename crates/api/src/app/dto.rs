use serde::Deserialize;

use campus_core::UserId;

// -------------------------
// Request DTOs
// -------------------------
//
// Fields are optional at the wire level so that missing parameters produce a
// 400 with a useful message (handler-side presence checks) instead of a
// generic deserialization rejection.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassroomRequest {
    pub name: Option<String>,
    pub teacher_id: Option<UserId>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    pub student_id: Option<UserId>,
    pub teacher_id: Option<UserId>,
}

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub frequency: Option<String>,
    pub repeat_until: Option<String>,
}
