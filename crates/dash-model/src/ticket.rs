//! Support ticket draft and wire shapes

use serde::{Deserialize, Serialize};

/// Ticket draft held by the support form. Created fresh per modal open,
/// discarded on close or submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportTicket {
    pub subject: String,
    pub description: String,
    /// Digits only, truncated to ten as typed.
    pub contact_number: String,
}

/// Wire shape for `POST /support`.
///
/// The server mixes naming styles on this endpoint: `user_id` stays
/// snake_case while `contactNumber` is camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportPayload {
    pub user_id: String,
    pub email: String,
    pub subject: String,
    pub description: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    /// Hosted screenshot URL, or empty when none was attached.
    pub screenshot: String,
}

/// Record from `GET /support/user/:userId` — the caller's past requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SupportRequestRecord {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_wire_names() {
        let payload = SupportPayload {
            user_id: "u-1".to_string(),
            email: "jo@example.com".to_string(),
            subject: "Broken page".to_string(),
            description: "The page will not load".to_string(),
            contact_number: "9876543210".to_string(),
            screenshot: String::new(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user_id"], "u-1");
        assert_eq!(json["contactNumber"], "9876543210");
        assert_eq!(json["screenshot"], "");
    }

    #[test]
    fn history_record_tolerates_missing_fields() {
        let record: SupportRequestRecord =
            serde_json::from_str(r#"{"subject":"Hi"}"#).unwrap();
        assert_eq!(record.subject, "Hi");
        assert_eq!(record.status, None);
    }
}
