use async_trait::async_trait;
use thiserror::Error;

use campus_classrooms::{Classroom, ForumPost, MemberKind};
use campus_core::{ClassroomId, TenantId, UserId};

/// Classroom Store operation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The keyed record does not exist (mutation against a missing record).
    #[error("classroom record not found")]
    NotFound,

    /// Transport/storage failure.
    #[error("store request failed: {0}")]
    Transport(String),
}

/// Classroom Store port.
///
/// Reads are scoped by tenant *and* classroom together: a stale or guessed
/// classroom id that belongs to a different tenant reads as absent, never as
/// someone else's record. Mutations are record-keyed and each one is atomic
/// on its own; there is no cross-operation transaction.
#[async_trait]
pub trait ClassroomStore: Send + Sync {
    /// Point read of a whole classroom record, tenant-scoped.
    async fn read(
        &self,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
    ) -> Result<Option<Classroom>, StoreError>;

    /// All classroom records under a tenant.
    async fn list(&self, tenant_id: TenantId) -> Result<Vec<Classroom>, StoreError>;

    /// Persist a freshly created classroom record.
    async fn create(&self, classroom: Classroom) -> Result<(), StoreError>;

    /// Atomic set-add into a roster. Adding a present id is a no-op.
    async fn add_member(
        &self,
        classroom_id: ClassroomId,
        kind: MemberKind,
        user: UserId,
    ) -> Result<(), StoreError>;

    /// Atomic set-remove from a roster. Removing an absent id is a no-op.
    async fn remove_member(
        &self,
        classroom_id: ClassroomId,
        kind: MemberKind,
        user: UserId,
    ) -> Result<(), StoreError>;

    /// Overwrite the freeform content field.
    async fn write_content(
        &self,
        classroom_id: ClassroomId,
        content: String,
    ) -> Result<(), StoreError>;

    /// Append a post to the forum log (insertion order is chronological order).
    async fn append_forum_post(
        &self,
        classroom_id: ClassroomId,
        post: ForumPost,
    ) -> Result<(), StoreError>;
}
