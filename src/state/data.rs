/// Shared data structures for the application state
///
/// These structs represent the user records that flow between
/// the network layer and the UI layer.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// A user account as served by the admin API
///
/// Field names follow the server's JSON (camelCase), hence the
/// rename attribute on the struct.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique database ID
    pub id: i64,
    /// Login name, unique across the system
    pub username: String,
    /// Contact email, unique across the system
    pub email: String,
    /// Display name shown in the table
    pub full_name: String,
    /// Optional phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Access level
    pub role: Role,
    /// Whether the account may log in
    pub active: bool,
    /// When the account was registered (server local time, no zone)
    pub created_at: NaiveDateTime,
}

impl User {
    /// Registration date as shown in the table (date part only)
    pub fn created_on(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }

    /// Status label shown in the table and in confirmation prompts
    pub fn status_label(&self) -> &'static str {
        if self.active { "Active" } else { "Inactive" }
    }
}

/// Access roles known to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Librarian,
    User,
}

impl Role {
    /// All roles, in the order the create form offers them
    pub const ALL: [Role; 3] = [Role::Admin, Role::Librarian, Role::User];

    /// Human-readable label for table cells and pick lists
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Librarian => "Librarian",
            Role::User => "User",
        }
    }

    /// Server-side enum name, sent in form posts
    pub fn as_param(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Librarian => "LIBRARIAN",
            Role::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_json() {
        let json = r#"{
            "id": 7,
            "username": "mgarcia",
            "email": "mgarcia@example.com",
            "fullName": "Maria Garcia",
            "phone": "+34 600 123 456",
            "role": "LIBRARIAN",
            "active": true,
            "createdAt": "2025-05-27T10:15:30"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.full_name, "Maria Garcia");
        assert_eq!(user.role, Role::Librarian);
        assert!(user.active);
        assert_eq!(user.created_on(), "2025-05-27");
    }

    #[test]
    fn test_phone_is_optional() {
        let json = r#"{
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "fullName": "System Admin",
            "role": "ADMIN",
            "active": true,
            "createdAt": "2025-01-01T00:00:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Admin.label(), "Administrator");
        assert_eq!(Role::Admin.as_param(), "ADMIN");
        assert_eq!(Role::User.to_string(), "User");
    }

    #[test]
    fn test_status_label() {
        let json = r#"{
            "id": 2,
            "username": "jlopez",
            "email": "jlopez@example.com",
            "fullName": "Juan Lopez",
            "role": "USER",
            "active": false,
            "createdAt": "2025-03-10T08:00:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.status_label(), "Inactive");
    }
}
