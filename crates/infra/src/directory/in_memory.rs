use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use campus_core::{TenantId, UserId};

use super::r#trait::{Directory, DirectoryError, Tenant, User};

/// In-memory directory adapter for tests and dev wiring.
///
/// Seed it with `insert_tenant` / `insert_user`; lookups behave like the
/// remote directory's point reads.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    tenants: Mutex<HashMap<TenantId, Tenant>>,
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_tenant(&self, tenant: Tenant) {
        self.tenants.lock().unwrap().insert(tenant.id, tenant);
    }

    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }
}

#[async_trait]
impl Directory for InMemoryDirectory {
    async fn get_tenant(&self, tenant_id: TenantId) -> Result<Option<Tenant>, DirectoryError> {
        Ok(self.tenants.lock().unwrap().get(&tenant_id).cloned())
    }

    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }
}
