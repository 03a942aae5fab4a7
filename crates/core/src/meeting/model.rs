use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Identifier of the user a request is made on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a new record id. UUID v7 so ids sort by creation time.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// A meeting owned by exactly one user.
/// Maps to the `meetings` PostgreSQL table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub source_type: Option<String>,
    pub source_url: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordered, typed block of content attached to a meeting.
/// Maps to the `meeting_sections` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSection {
    pub id: String,
    pub meeting_id: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub order_index: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Task derived from a meeting. Maps to the `action_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub meeting_id: String,
    pub assignee: Option<String>,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    /// Free-form, e.g. "open" or "done".
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A meeting together with its children, as returned by `getMeeting`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetail {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub sections: Vec<MeetingSection>,
    pub action_items: Vec<ActionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_section() -> MeetingSection {
        MeetingSection {
            id: "s1".to_string(),
            meeting_id: "m1".to_string(),
            section_type: "notes".to_string(),
            order_index: 1,
            content: "hi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn section_serializes_type_tag() {
        let value = serde_json::to_value(sample_section()).unwrap();
        assert_eq!(value["type"], json!("notes"));
        assert_eq!(value["meetingId"], json!("m1"));
        assert_eq!(value["orderIndex"], json!(1));
        assert!(value.get("sectionType").is_none());
    }

    #[test]
    fn detail_flattens_meeting_fields() {
        let now = Utc::now();
        let detail = MeetingDetail {
            meeting: Meeting {
                id: "m1".to_string(),
                user_id: "alice".to_string(),
                title: "Standup".to_string(),
                source_type: None,
                source_url: None,
                scheduled_at: None,
                duration_minutes: Some(15),
                created_at: now,
                updated_at: now,
            },
            sections: vec![sample_section()],
            action_items: vec![],
        };

        let value = serde_json::to_value(detail).unwrap();
        assert_eq!(value["id"], json!("m1"));
        assert_eq!(value["userId"], json!("alice"));
        assert_eq!(value["durationMinutes"], json!(15));
        assert_eq!(value["sections"].as_array().unwrap().len(), 1);
        assert_eq!(value["actionItems"], json!([]));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }
}
