//! Pure role resolution.
//!
//! The effective role is a fold over views fetched from independent systems
//! (tenant directory, classroom store). The fetches are never transactional,
//! so this function takes the already-fetched views and stays IO-free:
//!
//! - No IO
//! - No panics
//! - No business logic beyond the role fold itself
//!
//! The caller is responsible for scoping the classroom lookup by *both*
//! tenant id and classroom id before building a [`MembershipView`]; a
//! classroom belonging to a different tenant must never reach this function.

use campus_core::UserId;

use crate::claims::Caller;
use crate::role::EffectiveRole;

/// A caller's standing within one classroom's membership sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MembershipView {
    pub is_teacher: bool,
    pub is_student: bool,
}

impl MembershipView {
    /// Project a user against a classroom's roster slices.
    pub fn of(user: UserId, teachers: &[UserId], students: &[UserId]) -> Self {
        Self {
            is_teacher: teachers.contains(&user),
            is_student: students.contains(&user),
        }
    }
}

/// Fold the caller's effective role from independently fetched views.
///
/// `tenant_admin` is the admin of the tenant named in the request path, or
/// `None` when the tenant lookup found nothing (operations that tolerate a
/// missing tenant simply resolve the admin check to false and continue on
/// membership alone). `membership` is `None` when the operation is not
/// classroom-scoped.
///
/// Upgrade order matches the source system: super-admin flag first, then the
/// tenant-admin check (which never downgrades a super admin), then classroom
/// membership; teacher wins over student, and neither overrides an admin.
pub fn resolve_role(
    caller: &Caller,
    tenant_admin: Option<UserId>,
    membership: Option<MembershipView>,
) -> EffectiveRole {
    let mut role = if caller.super_admin {
        EffectiveRole::SuperAdmin
    } else {
        EffectiveRole::None
    };

    if role != EffectiveRole::SuperAdmin && tenant_admin == Some(caller.id) {
        role = EffectiveRole::TenantAdmin;
    }

    if let Some(m) = membership {
        if !role.is_admin() {
            if m.is_teacher {
                role = EffectiveRole::Teacher;
            } else if m.is_student {
                role = EffectiveRole::Student;
            }
        }
    }

    role
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn caller(super_admin: bool) -> Caller {
        Caller {
            id: UserId::new(),
            super_admin,
        }
    }

    #[test]
    fn unaffiliated_caller_resolves_to_none() {
        let c = caller(false);
        assert_eq!(resolve_role(&c, None, None), EffectiveRole::None);
        assert_eq!(
            resolve_role(
                &c,
                Some(UserId::new()),
                Some(MembershipView {
                    is_teacher: false,
                    is_student: false
                })
            ),
            EffectiveRole::None
        );
    }

    #[test]
    fn tenant_admin_upgrade_requires_matching_admin_id() {
        let c = caller(false);
        assert_eq!(resolve_role(&c, Some(c.id), None), EffectiveRole::TenantAdmin);
        assert_eq!(resolve_role(&c, Some(UserId::new()), None), EffectiveRole::None);
    }

    #[test]
    fn missing_tenant_degrades_to_membership_only() {
        let c = caller(false);
        let m = MembershipView {
            is_teacher: true,
            is_student: false,
        };
        assert_eq!(resolve_role(&c, None, Some(m)), EffectiveRole::Teacher);
    }

    #[test]
    fn teacher_wins_over_student_within_a_classroom() {
        let c = caller(false);
        let m = MembershipView {
            is_teacher: true,
            is_student: true,
        };
        assert_eq!(resolve_role(&c, None, Some(m)), EffectiveRole::Teacher);

        let m = MembershipView {
            is_teacher: false,
            is_student: true,
        };
        assert_eq!(resolve_role(&c, None, Some(m)), EffectiveRole::Student);
    }

    #[test]
    fn admin_determination_is_not_downgraded_by_membership() {
        let c = caller(false);
        let m = MembershipView {
            is_teacher: false,
            is_student: true,
        };
        assert_eq!(
            resolve_role(&c, Some(c.id), Some(m)),
            EffectiveRole::TenantAdmin
        );
    }

    #[test]
    fn membership_view_projects_roster_slices() {
        let user = UserId::new();
        let other = UserId::new();
        let m = MembershipView::of(user, &[user], &[other]);
        assert!(m.is_teacher);
        assert!(!m.is_student);
    }

    proptest! {
        /// Property: a super-admin caller resolves to SuperAdmin (with full
        /// capability) regardless of tenant admin or classroom membership.
        #[test]
        fn super_admin_wins_everywhere(
            admin_matches in any::<bool>(),
            has_membership in any::<bool>(),
            is_teacher in any::<bool>(),
            is_student in any::<bool>(),
        ) {
            let c = caller(true);
            let tenant_admin = if admin_matches { Some(c.id) } else { Some(UserId::new()) };
            let membership = has_membership.then_some(MembershipView { is_teacher, is_student });

            let role = resolve_role(&c, tenant_admin, membership);
            prop_assert_eq!(role, EffectiveRole::SuperAdmin);
            prop_assert!(role.can_manage_classroom());
            prop_assert!(role.can_view_classroom());
            prop_assert!(role.can_create_classroom());
        }
    }
}
