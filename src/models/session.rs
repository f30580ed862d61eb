//! Session record stored in the document store's `sessions` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reply to a create. Only the assigned id is read; whatever else the
/// store echoes back is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedDocument {
    /// Document stores hand out either numeric or string ids.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

/// Body for creating a session record on HR login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub email: String,
    pub login_at: DateTime<Utc>,
    pub logout_at: Option<DateTime<Utc>>,
}

impl NewSession {
    pub fn opened_now(email: &str) -> Self {
        Self {
            email: email.to_string(),
            login_at: Utc::now(),
            logout_at: None,
        }
    }
}

/// Patch body closing a session record on HR logout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseSession {
    pub logout_at: DateTime<Utc>,
}

impl CloseSession {
    pub fn now() -> Self {
        Self {
            logout_at: Utc::now(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_session_serializes_null_logout() {
        let body = serde_json::to_value(NewSession::opened_now("a@b.com")).unwrap();
        assert_eq!(body["email"], "a@b.com");
        assert!(body["loginAt"].is_string());
        assert!(body["logoutAt"].is_null());
    }

    #[test]
    fn test_created_document_needs_only_an_id() {
        let created: CreatedDocument = serde_json::from_value(json!({ "id": 5 })).unwrap();
        assert_eq!(created.id, "5");
    }

    #[test]
    fn test_created_document_ignores_echoed_fields() {
        let created: CreatedDocument = serde_json::from_value(json!({
            "id": "7f3a",
            "email": "a@b.com",
            "loginAt": "March 1st",
            "logoutAt": null
        }))
        .unwrap();
        assert_eq!(created.id, "7f3a");
    }

    #[test]
    fn test_created_document_requires_id() {
        let result: Result<CreatedDocument, _> =
            serde_json::from_value(json!({ "email": "a@b.com" }));
        assert!(result.is_err());
    }
}
