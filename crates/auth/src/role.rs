use serde::{Deserialize, Serialize};

/// Effective role of a caller for one (tenant, classroom) scope.
///
/// This is derived per request, never stored. The model is a capability
/// lattice, not a strict hierarchy: `SuperAdmin` and `TenantAdmin` both imply
/// full classroom capability, while `Teacher` and `Student` are mutually
/// exclusive within a classroom and carry no authority outside it. A
/// `TenantAdmin` is only an admin for classrooms inside their own tenant.
///
/// Deliberately no `Ord` impl: ordering exists for reporting only (see
/// [`EffectiveRole::precedence`]); authorization decisions go through the
/// capability predicates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectiveRole {
    None,
    Student,
    Teacher,
    TenantAdmin,
    SuperAdmin,
}

impl EffectiveRole {
    /// Reporting precedence: SuperAdmin > TenantAdmin > Teacher > Student > None.
    pub fn precedence(self) -> u8 {
        match self {
            EffectiveRole::SuperAdmin => 4,
            EffectiveRole::TenantAdmin => 3,
            EffectiveRole::Teacher => 2,
            EffectiveRole::Student => 1,
            EffectiveRole::None => 0,
        }
    }

    /// Either admin level; both grant every classroom capability.
    pub fn is_admin(self) -> bool {
        matches!(self, EffectiveRole::SuperAdmin | EffectiveRole::TenantAdmin)
    }

    /// Manage a classroom: roster, content, schedule.
    pub fn can_manage_classroom(self) -> bool {
        self.is_admin() || self == EffectiveRole::Teacher
    }

    /// View a classroom and post to its forum.
    pub fn can_view_classroom(self) -> bool {
        self != EffectiveRole::None
    }

    /// Create a classroom within the tenant (admin-only).
    pub fn can_create_classroom(self) -> bool {
        self.is_admin()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveRole::None => "none",
            EffectiveRole::Student => "student",
            EffectiveRole::Teacher => "teacher",
            EffectiveRole::TenantAdmin => "tenant_admin",
            EffectiveRole::SuperAdmin => "super_admin",
        }
    }
}

impl core::fmt::Display for EffectiveRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
