use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campus_auth::EffectiveRole;
use campus_core::{ClassroomId, DomainError, DomainResult, PostId, TenantId, UserId};

/// A forum post. Append-only: never edited or deleted once created.
///
/// `created_at` is a reporting field; ordering is the append order of the
/// classroom's forum log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: PostId,
    pub author: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ForumPost {
    pub fn new(author: UserId, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: PostId::new(),
            author,
            content,
            created_at,
        }
    }
}

/// Which roster a membership operation targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Teacher,
    Student,
}

impl MemberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Teacher => "teacher",
            MemberKind::Student => "student",
        }
    }
}

impl core::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classroom record.
///
/// # Invariants
/// - `tenant_id` is immutable after creation.
/// - `teachers` and `students` are sets: no duplicates, order irrelevant.
///   The store's atomic member primitives uphold this; the vectors here are
///   just the serialized shape of those sets.
/// - A classroom has at least the creating teacher at creation time.
/// - A user reaches `teachers`/`students` only after being validated as a
///   member of `tenant_id`.
/// - `forum_posts` is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: ClassroomId,
    pub tenant_id: TenantId,
    pub name: String,
    pub teachers: Vec<UserId>,
    pub students: Vec<UserId>,
    pub content: String,
    pub forum_posts: Vec<ForumPost>,
}

impl Classroom {
    /// Create a classroom seeded with its first teacher and empty content.
    pub fn create(tenant_id: TenantId, name: String, teacher: UserId) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: ClassroomId::new(),
            tenant_id,
            name,
            teachers: vec![teacher],
            students: Vec::new(),
            content: String::new(),
            forum_posts: Vec::new(),
        })
    }

    pub fn is_teacher(&self, user: UserId) -> bool {
        self.teachers.contains(&user)
    }

    pub fn is_student(&self, user: UserId) -> bool {
        self.students.contains(&user)
    }

    /// Roster slice for one member kind.
    pub fn roster(&self, kind: MemberKind) -> &[UserId] {
        match kind {
            MemberKind::Teacher => &self.teachers,
            MemberKind::Student => &self.students,
        }
    }
}

/// Role-gated projection of a classroom.
///
/// Admins and teachers see the full record; students see everything except
/// the student roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomView {
    pub id: ClassroomId,
    pub name: String,
    pub teachers: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<UserId>>,
    pub content: String,
    pub forum_posts: Vec<ForumPost>,
}

impl ClassroomView {
    pub fn for_role(classroom: &Classroom, role: EffectiveRole) -> Self {
        let students = role
            .can_manage_classroom()
            .then(|| classroom.students.clone());

        Self {
            id: classroom.id,
            name: classroom.name.clone(),
            teachers: classroom.teachers.clone(),
            students,
            content: classroom.content.clone(),
            forum_posts: classroom.forum_posts.clone(),
        }
    }
}

/// Listing shape for non-admin callers: id and name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomSummary {
    pub id: ClassroomId,
    pub name: String,
}

/// Listing shape for admins: includes both rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub id: ClassroomId,
    pub name: String,
    pub teachers: Vec<UserId>,
    pub students: Vec<UserId>,
}

impl From<&Classroom> for ClassroomSummary {
    fn from(c: &Classroom) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

impl From<&Classroom> for RosterSummary {
    fn from(c: &Classroom) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            teachers: c.teachers.clone(),
            students: c.students.clone(),
        }
    }
}
