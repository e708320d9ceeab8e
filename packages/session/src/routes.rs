//! Route table and the role-aware landing resolver.

use crate::role::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SIGNUP: &str = "/signup";
pub const DASHBOARD: &str = "/dashboard";
pub const STUDENT_DASHBOARD: &str = "/student/dashboard";
pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ADMIN_USERS: &str = "/admin/users";

/// Canonical post-login destination for a role.
///
/// Consulted by the root redirect view after login and on `/dashboard`. This
/// never blocks rendering; it only computes a target. Sessions without a role
/// land on the login page.
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Student) => STUDENT_DASHBOARD,
        Some(Role::Staff) | Some(Role::SuperAdmin) => ADMIN_DASHBOARD,
        None => LOGIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_lands_on_the_student_dashboard() {
        assert_eq!(landing_route(Some(Role::Student)), "/student/dashboard");
    }

    #[test]
    fn staff_and_super_admin_share_the_admin_dashboard() {
        assert_eq!(landing_route(Some(Role::Staff)), "/admin/dashboard");
        assert_eq!(landing_route(Some(Role::SuperAdmin)), "/admin/dashboard");
    }

    #[test]
    fn no_role_lands_on_login() {
        assert_eq!(landing_route(None), "/login");
    }
}
