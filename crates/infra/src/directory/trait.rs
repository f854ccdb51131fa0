use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use campus_core::{TenantId, UserId};

/// Tenant record as the directory reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub admin_id: UserId,
}

/// User record as the directory reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub tenant_memberships: HashSet<TenantId>,
}

impl User {
    pub fn is_member_of(&self, tenant_id: TenantId) -> bool {
        self.tenant_memberships.contains(&tenant_id)
    }
}

/// Directory request failure (transport-level; "not found" is `Ok(None)`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("directory request failed: {0}")]
    Transport(String),
}

/// Tenant/User Directory port.
///
/// Lookups are point reads with no retries; a missing record is `Ok(None)`,
/// never an error, so callers can distinguish absence from outage.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn get_tenant(&self, tenant_id: TenantId) -> Result<Option<Tenant>, DirectoryError>;
    async fn get_user(&self, user_id: UserId) -> Result<Option<User>, DirectoryError>;
}
