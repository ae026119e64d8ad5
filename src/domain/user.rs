//! Authenticated user identity.

use serde::{Deserialize, Serialize};

/// Access level of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Identity of the signed-in user, persisted to the vault as JSON under the
/// `auth-user` key so a restart can resume the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier; `"1"` for mock logins, timestamp millis for signups.
    pub id: String,

    pub email: String,

    /// Display name; for logins this is the local part of the email.
    pub name: String,

    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let user = User {
            id: "1".to_string(),
            email: "ana@example.com".to_string(),
            name: "ana".to_string(),
            role: UserRole::User,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
