//! Request payloads for the handler set.
//!
//! Absent optional fields and explicit `null` are treated the same way.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingInput {
    pub id: Option<String>,
    pub title: String,
    pub source_type: Option<String>,
    pub source_url: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
}

/// Partial patch: only the fields present are written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingInput {
    pub id: String,
    pub title: Option<String>,
    pub source_type: Option<String>,
    pub source_url: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
}

impl UpdateMeetingInput {
    /// True when the patch carries no field besides `id`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.source_type.is_none()
            && self.source_url.is_none()
            && self.scheduled_at.is_none()
            && self.duration_minutes.is_none()
    }
}

/// Input for operations addressing a single meeting by id.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingIdInput {
    pub id: String,
}

/// Create when `id` is absent, otherwise replace every mutable field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSectionInput {
    pub id: Option<String>,
    pub meeting_id: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub order_index: i32,
    pub content: String,
}

/// Create when `id` is absent, otherwise replace every mutable field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveActionItemInput {
    pub id: Option<String>,
    pub meeting_id: String,
    pub assignee: Option<String>,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// Input for deleting a child record of a meeting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildIdInput {
    pub id: String,
    pub meeting_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSectionsInput {
    pub meeting_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActionItemsInput {
    pub meeting_id: Option<String>,
}
