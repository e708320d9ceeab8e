use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Whether an account may sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Suspended,
}

/// Account record returned by the auth API and persisted across reloads.
///
/// The persisted copy is the `serde_json` encoding of this struct under
/// [`crate::storage::USER_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_api_record() {
        let json = r#"{
            "id": 7,
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "9876543210",
            "role": "staff",
            "status": "active",
            "created_at": "2024-01-05T10:00:00Z",
            "updated_at": "2024-02-01T08:30:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Staff);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn phone_and_timestamps_are_optional() {
        let json = r#"{"id":1,"name":"N","email":"n@e.com","role":"student","status":"suspended"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.phone.is_none());
        assert!(user.created_at.is_none());
        assert_eq!(user.status, UserStatus::Suspended);
    }

    #[test]
    fn persisted_record_round_trips() {
        let user = User {
            id: 3,
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: None,
            role: Role::Student,
            status: UserStatus::Active,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
