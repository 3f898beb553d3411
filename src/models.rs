//! Data models for the users resource

use serde::{Deserialize, Serialize};

/// A stored user record
///
/// `id` and `created_at` are assigned by the store at creation and are
/// immutable afterwards; updates replace every other field wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
    /// RFC 3339 timestamp, set once at creation
    pub created_at: String,
}

/// Incoming user payload for create and update requests
///
/// Absent fields decode to their zero values so required-field checks see an
/// empty string rather than a decode failure. `id` and `created_at` sent by
/// the client are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: u32,
}

impl UserDraft {
    /// Validate required-field presence
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err("Name and email are required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_missing_fields_decode_to_empty() {
        let draft: UserDraft = serde_json::from_str("{}").unwrap();
        assert!(draft.name.is_empty());
        assert!(draft.email.is_empty());
        assert_eq!(draft.age, 0);
    }

    #[test]
    fn test_draft_ignores_id_and_created_at() {
        let draft: UserDraft = serde_json::from_str(
            r#"{"id": 99, "name": "A", "email": "a@x.com", "created_at": "2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(draft.name, "A");
        assert_eq!(draft.email, "a@x.com");
    }

    #[test]
    fn test_validate_rejects_empty_required_fields() {
        let draft = UserDraft {
            name: String::new(),
            email: "x@x.com".to_string(),
            age: 20,
        };
        assert!(draft.validate().is_err());

        let draft = UserDraft {
            name: "B".to_string(),
            email: String::new(),
            age: 20,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let draft = UserDraft {
            name: "B".to_string(),
            email: "b@x.com".to_string(),
            age: 0,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_user_serializes_all_fields() {
        let user = User {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            age: 25,
            created_at: "2024-01-01T10:00:00Z".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["created_at"], "2024-01-01T10:00:00Z");
    }
}
