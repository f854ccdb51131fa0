//! Classroom operations (application-level orchestration).
//!
//! Every inbound operation follows the same shape: sequential fetches from
//! the directory and the store, a pure role fold, a capability check, then
//! domain validation, then at most one mutation. The fetches are independent
//! request-responses — nothing here is transactional across collaborators —
//! so all cross-view reasoning lives in `campus_auth::resolve_role`, which
//! takes the already-fetched views.
//!
//! Failure policy: authorization and validation failures resolve locally; a
//! failed collaborator call surfaces immediately with its payload attached.
//! No retries, no partial success.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{debug, error, info};

use campus_auth::{Caller, EffectiveRole, MembershipView, resolve_role};
use campus_classrooms::{
    Classroom, ClassroomSummary, ClassroomView, ForumPost, MemberKind, RecurrenceSpec,
    RosterSummary,
};
use campus_core::{ClassroomId, DomainError, TenantId, UserId};

use crate::directory::{Directory, DirectoryError};
use crate::schedule::{CreateEvent, ScheduleError, ScheduleService};
use crate::store::{ClassroomStore, StoreError};

/// Operation failure, aligned with the API error taxonomy.
///
/// `Unauthenticated` does not appear here: callers of this service are
/// authenticated by construction (the HTTP layer rejects anonymous requests
/// before building a [`Caller`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Authenticated but lacking the required capability.
    #[error("forbidden")]
    Forbidden,

    /// Tenant, classroom, or target user absent. The payload names which.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Missing or malformed required fields.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A collaborator call failed; `detail` carries its error payload.
    #[error("upstream failure: {message}")]
    Upstream {
        message: String,
        detail: Option<JsonValue>,
    },
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<DirectoryError> for ServiceError {
    fn from(err: DirectoryError) -> Self {
        ServiceError::Upstream {
            message: err.to_string(),
            detail: None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound("classroom"),
            StoreError::Transport(msg) => ServiceError::Upstream {
                message: msg,
                detail: None,
            },
        }
    }
}

impl From<ScheduleError> for ServiceError {
    fn from(err: ScheduleError) -> Self {
        ServiceError::Upstream {
            message: err.message,
            detail: err.detail,
        }
    }
}

/// Whether an operation hard-fails when the tenant lookup finds nothing.
///
/// Classroom creation fails closed on a missing tenant; every other
/// operation tolerates the miss and degrades to membership-only resolution
/// (the admin check simply evaluates false).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TenantRule {
    Required,
    Tolerated,
}

/// Role-gated listing shape: admins get rosters, members get id+name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClassroomListing {
    Admin(Vec<RosterSummary>),
    Member(Vec<ClassroomSummary>),
}

/// Application service for all classroom operations.
pub struct ClassroomService {
    directory: Arc<dyn Directory>,
    store: Arc<dyn ClassroomStore>,
    scheduler: Arc<dyn ScheduleService>,
}

impl ClassroomService {
    pub fn new(
        directory: Arc<dyn Directory>,
        store: Arc<dyn ClassroomStore>,
        scheduler: Arc<dyn ScheduleService>,
    ) -> Self {
        Self {
            directory,
            store,
            scheduler,
        }
    }

    /// Resolve the caller's effective role for (tenant, classroom?).
    ///
    /// Fetch order is fixed: tenant first, then the classroom scoped by both
    /// ids together. Returns the classroom record alongside the role so
    /// operations do not re-read it.
    pub async fn resolve(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: Option<ClassroomId>,
        rule: TenantRule,
    ) -> Result<(EffectiveRole, Option<Classroom>), ServiceError> {
        let tenant = self.directory.get_tenant(tenant_id).await?;

        if tenant.is_none() && rule == TenantRule::Required {
            debug!(%tenant_id, "tenant not found");
            return Err(ServiceError::NotFound("tenant"));
        }

        let classroom = match classroom_id {
            Some(classroom_id) => {
                let record = self.store.read(tenant_id, classroom_id).await?;
                match record {
                    Some(c) => Some(c),
                    None => {
                        debug!(%tenant_id, %classroom_id, "classroom not found");
                        return Err(ServiceError::NotFound("classroom"));
                    }
                }
            }
            None => None,
        };

        let membership = classroom
            .as_ref()
            .map(|c| MembershipView::of(caller.id, &c.teachers, &c.students));

        let role = resolve_role(caller, tenant.map(|t| t.admin_id), membership);
        Ok((role, classroom))
    }

    /// Create a classroom seeded with its first teacher. Admin-only; the
    /// tenant must exist and the teacher must be one of its members.
    pub async fn create_classroom(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        name: String,
        teacher_id: UserId,
    ) -> Result<Classroom, ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, None, TenantRule::Required)
            .await?;
        if !role.can_create_classroom() {
            info!(caller = %caller.id, %tenant_id, "classroom creation denied");
            return Err(ServiceError::Forbidden);
        }

        self.require_tenant_member(tenant_id, teacher_id, "teacher")
            .await?;

        let classroom = Classroom::create(tenant_id, name, teacher_id)?;
        self.store.create(classroom.clone()).await?;

        info!(caller = %caller.id, %tenant_id, classroom = %classroom.id, "classroom created");
        Ok(classroom)
    }

    /// Fetch a classroom with role-gated field visibility.
    pub async fn get_classroom(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
    ) -> Result<ClassroomView, ServiceError> {
        let (role, classroom) = self
            .resolve(caller, tenant_id, Some(classroom_id), TenantRule::Tolerated)
            .await?;
        if !role.can_view_classroom() {
            info!(caller = %caller.id, %classroom_id, "classroom view denied");
            return Err(ServiceError::Forbidden);
        }

        // resolve() always returns the record when a classroom id was given.
        let classroom = classroom.ok_or(ServiceError::NotFound("classroom"))?;
        Ok(ClassroomView::for_role(&classroom, role))
    }

    /// List a tenant's classrooms: admins see every record with rosters,
    /// anyone else sees id+name of classrooms they belong to.
    pub async fn list_classrooms(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
    ) -> Result<ClassroomListing, ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, None, TenantRule::Tolerated)
            .await?;

        if role.is_admin() {
            let all = self.store.list(tenant_id).await?;
            return Ok(ClassroomListing::Admin(
                all.iter().map(RosterSummary::from).collect(),
            ));
        }

        Ok(ClassroomListing::Member(
            self.user_classrooms(tenant_id, caller.id).await?,
        ))
    }

    /// Classrooms where `user` is teacher or student. Also serves sibling
    /// services that need a user's classroom list.
    pub async fn user_classrooms(
        &self,
        tenant_id: TenantId,
        user: UserId,
    ) -> Result<Vec<ClassroomSummary>, ServiceError> {
        let all = self.store.list(tenant_id).await?;
        Ok(all
            .iter()
            .filter(|c| c.is_teacher(user) || c.is_student(user))
            .map(ClassroomSummary::from)
            .collect())
    }

    /// Add a student or teacher to a classroom.
    ///
    /// Precondition order is load-bearing: capability first, then the
    /// exactly-one-target rule, then the tenant-membership check on the
    /// target. A user outside the tenant cannot be added by anyone, super
    /// admins included.
    pub async fn add_member(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
        student_id: Option<UserId>,
        teacher_id: Option<UserId>,
    ) -> Result<MemberKind, ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, Some(classroom_id), TenantRule::Tolerated)
            .await?;
        if !role.can_manage_classroom() {
            info!(caller = %caller.id, %classroom_id, "member add denied");
            return Err(ServiceError::Forbidden);
        }

        let (kind, member) = exactly_one_target(student_id, teacher_id)?;
        self.require_tenant_member(tenant_id, member, kind.as_str())
            .await?;

        self.store.add_member(classroom_id, kind, member).await?;

        info!(caller = %caller.id, %classroom_id, member = %member, kind = kind.as_str(), "member added");
        Ok(kind)
    }

    /// Remove a student or teacher from a classroom.
    ///
    /// Deliberately asymmetric from add: no directory check — the target is
    /// an id already present (or absent, in which case removal is a no-op)
    /// in the local roster.
    pub async fn remove_member(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
        student_id: Option<UserId>,
        teacher_id: Option<UserId>,
    ) -> Result<MemberKind, ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, Some(classroom_id), TenantRule::Tolerated)
            .await?;
        if !role.can_manage_classroom() {
            info!(caller = %caller.id, %classroom_id, "member removal denied");
            return Err(ServiceError::Forbidden);
        }

        let (kind, member) = exactly_one_target(student_id, teacher_id)?;
        self.store.remove_member(classroom_id, kind, member).await?;

        info!(caller = %caller.id, %classroom_id, member = %member, kind = kind.as_str(), "member removed");
        Ok(kind)
    }

    /// Overwrite the classroom's freeform content.
    pub async fn set_content(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
        content: String,
    ) -> Result<(), ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, Some(classroom_id), TenantRule::Tolerated)
            .await?;
        if !role.can_manage_classroom() {
            info!(caller = %caller.id, %classroom_id, "content edit denied");
            return Err(ServiceError::Forbidden);
        }

        if content.is_empty() {
            debug!(%classroom_id, "content edit rejected: empty content");
            return Err(ServiceError::Validation("content is required".to_string()));
        }

        self.store.write_content(classroom_id, content).await?;
        info!(caller = %caller.id, %classroom_id, "content modified");
        Ok(())
    }

    /// Append a forum post. Viewer-level access: students included.
    pub async fn post_to_forum(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
        content: String,
    ) -> Result<ForumPost, ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, Some(classroom_id), TenantRule::Tolerated)
            .await?;
        if !role.can_view_classroom() {
            info!(caller = %caller.id, %classroom_id, "forum post denied");
            return Err(ServiceError::Forbidden);
        }

        if content.is_empty() {
            debug!(%classroom_id, "forum post rejected: empty content");
            return Err(ServiceError::Validation("content is required".to_string()));
        }

        let post = ForumPost::new(caller.id, content, chrono::Utc::now());
        self.store.append_forum_post(classroom_id, post.clone()).await?;

        info!(caller = %caller.id, %classroom_id, post = %post.id, "forum post created");
        Ok(post)
    }

    /// Normalize a schedule request and dispatch it to the scheduling
    /// service, surfacing that service's outcome transparently.
    pub async fn create_schedule_event(
        &self,
        caller: &Caller,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
        start: &str,
        end: &str,
        frequency: &str,
        repeat_until: Option<&str>,
    ) -> Result<RecurrenceSpec, ServiceError> {
        let (role, _) = self
            .resolve(caller, tenant_id, Some(classroom_id), TenantRule::Tolerated)
            .await?;
        if !role.can_manage_classroom() {
            info!(caller = %caller.id, %classroom_id, "schedule event denied");
            return Err(ServiceError::Forbidden);
        }

        let spec = RecurrenceSpec::build(start, end, frequency, repeat_until)?;

        let request = CreateEvent {
            tenant_id,
            classroom_id,
            spec,
        };
        if let Err(err) = self.scheduler.create_event(request).await {
            error!(%classroom_id, error = %err, "scheduling service rejected event");
            return Err(err.into());
        }

        info!(caller = %caller.id, %classroom_id, frequency = spec.frequency.as_str(), "schedule event created");
        Ok(spec)
    }

    async fn require_tenant_member(
        &self,
        tenant_id: TenantId,
        user_id: UserId,
        label: &'static str,
    ) -> Result<(), ServiceError> {
        let user = self.directory.get_user(user_id).await?;
        match user {
            Some(u) if u.is_member_of(tenant_id) => Ok(()),
            _ => {
                debug!(%tenant_id, %user_id, "{label} not found in tenant");
                Err(ServiceError::NotFound(label))
            }
        }
    }
}

/// Exactly one of student/teacher must be supplied; both or neither is a
/// validation error regardless of which branch would be taken.
fn exactly_one_target(
    student_id: Option<UserId>,
    teacher_id: Option<UserId>,
) -> Result<(MemberKind, UserId), ServiceError> {
    match (student_id, teacher_id) {
        (Some(student), None) => Ok((MemberKind::Student, student)),
        (None, Some(teacher)) => Ok((MemberKind::Teacher, teacher)),
        _ => Err(ServiceError::Validation(
            "exactly one of studentId or teacherId is required".to_string(),
        )),
    }
}
