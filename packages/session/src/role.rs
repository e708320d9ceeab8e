use serde::{Deserialize, Serialize};

/// Authorization level attached to every account.
///
/// The set is closed: every protected route declares a subset of these as its
/// allowed roles, and an account always carries exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Staff,
    SuperAdmin,
}

impl Role {
    /// Wire value, matching the API's `role` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Staff => "staff",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Staff and super admins share the admin view group.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Staff | Role::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
