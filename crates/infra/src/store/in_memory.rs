use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use campus_classrooms::{Classroom, ForumPost, MemberKind};
use campus_core::{ClassroomId, TenantId, UserId};

use super::r#trait::{ClassroomStore, StoreError};

/// In-memory classroom store for tests and dev wiring.
///
/// Every mutation runs under one lock over the record map, which is what
/// makes the member primitives atomic set operations here.
#[derive(Debug, Default)]
pub struct InMemoryClassroomStore {
    records: Mutex<HashMap<ClassroomId, Classroom>>,
}

impl InMemoryClassroomStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn mutate<F>(&self, classroom_id: ClassroomId, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Classroom),
    {
        let mut records = self.records.lock().unwrap();
        let record = records.get_mut(&classroom_id).ok_or(StoreError::NotFound)?;
        f(record);
        Ok(())
    }
}

#[async_trait]
impl ClassroomStore for InMemoryClassroomStore {
    async fn read(
        &self,
        tenant_id: TenantId,
        classroom_id: ClassroomId,
    ) -> Result<Option<Classroom>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .get(&classroom_id)
            .filter(|c| c.tenant_id == tenant_id)
            .cloned())
    }

    async fn list(&self, tenant_id: TenantId) -> Result<Vec<Classroom>, StoreError> {
        let records = self.records.lock().unwrap();
        let mut out: Vec<Classroom> = records
            .values()
            .filter(|c| c.tenant_id == tenant_id)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; listings sort by id (UUIDv7,
        // so effectively creation order).
        out.sort_by_key(|c| *c.id.as_uuid());
        Ok(out)
    }

    async fn create(&self, classroom: Classroom) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(classroom.id, classroom);
        Ok(())
    }

    async fn add_member(
        &self,
        classroom_id: ClassroomId,
        kind: MemberKind,
        user: UserId,
    ) -> Result<(), StoreError> {
        self.mutate(classroom_id, |c| {
            let roster = match kind {
                MemberKind::Teacher => &mut c.teachers,
                MemberKind::Student => &mut c.students,
            };
            if !roster.contains(&user) {
                roster.push(user);
            }
        })
    }

    async fn remove_member(
        &self,
        classroom_id: ClassroomId,
        kind: MemberKind,
        user: UserId,
    ) -> Result<(), StoreError> {
        self.mutate(classroom_id, |c| {
            let roster = match kind {
                MemberKind::Teacher => &mut c.teachers,
                MemberKind::Student => &mut c.students,
            };
            roster.retain(|u| *u != user);
        })
    }

    async fn write_content(
        &self,
        classroom_id: ClassroomId,
        content: String,
    ) -> Result<(), StoreError> {
        self.mutate(classroom_id, |c| c.content = content)
    }

    async fn append_forum_post(
        &self,
        classroom_id: ClassroomId,
        post: ForumPost,
    ) -> Result<(), StoreError> {
        self.mutate(classroom_id, |c| c.forum_posts.push(post))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn seeded(store: &InMemoryClassroomStore) -> Classroom {
        let c = Classroom::create(TenantId::new(), "Physics".to_string(), UserId::new()).unwrap();
        store.create(c.clone()).await.unwrap();
        c
    }

    #[tokio::test]
    async fn read_is_scoped_by_tenant_and_classroom_together() {
        let store = InMemoryClassroomStore::new();
        let c = seeded(&store).await;

        assert!(store.read(c.tenant_id, c.id).await.unwrap().is_some());
        // Right classroom id, wrong tenant: must read as absent.
        assert!(store.read(TenantId::new(), c.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_member_is_idempotent() {
        let store = InMemoryClassroomStore::new();
        let c = seeded(&store).await;
        let student = UserId::new();

        store
            .add_member(c.id, MemberKind::Student, student)
            .await
            .unwrap();
        store
            .add_member(c.id, MemberKind::Student, student)
            .await
            .unwrap();

        let got = store.read(c.tenant_id, c.id).await.unwrap().unwrap();
        assert_eq!(got.students, vec![student]);
    }

    #[tokio::test]
    async fn remove_absent_member_is_a_noop() {
        let store = InMemoryClassroomStore::new();
        let c = seeded(&store).await;

        store
            .remove_member(c.id, MemberKind::Student, UserId::new())
            .await
            .unwrap();

        let got = store.read(c.tenant_id, c.id).await.unwrap().unwrap();
        assert_eq!(got.teachers, c.teachers);
        assert!(got.students.is_empty());
    }

    #[tokio::test]
    async fn forum_posts_keep_append_order() {
        let store = InMemoryClassroomStore::new();
        let c = seeded(&store).await;
        let author = UserId::new();

        for content in ["first", "second", "third"] {
            store
                .append_forum_post(c.id, ForumPost::new(author, content.to_string(), Utc::now()))
                .await
                .unwrap();
        }

        let got = store.read(c.tenant_id, c.id).await.unwrap().unwrap();
        let contents: Vec<&str> = got.forum_posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn mutations_against_missing_records_fail() {
        let store = InMemoryClassroomStore::new();
        let err = store
            .write_content(ClassroomId::new(), "x".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }
}
