use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MeetingStore, StoreResult};
use crate::error::StoreError;
use crate::meeting::{ActionItem, Meeting, MeetingSection};

/// In-process store for tests and database-less development.
/// Mirrors the PostgreSQL schema's cascade on meeting deletion.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    meetings: HashMap<String, Meeting>,
    sections: HashMap<String, MeetingSection>,
    action_items: HashMap<String, ActionItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeetingStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn insert_meeting(&self, meeting: &Meeting) -> StoreResult<Meeting> {
        let mut tables = self.tables.write().await;
        if tables.meetings.contains_key(&meeting.id) {
            return Err(StoreError::Conflict(meeting.id.clone()));
        }
        tables.meetings.insert(meeting.id.clone(), meeting.clone());
        Ok(meeting.clone())
    }

    async fn find_meeting(&self, id: &str, user_id: &str) -> StoreResult<Option<Meeting>> {
        let tables = self.tables.read().await;
        Ok(tables
            .meetings
            .get(id)
            .filter(|m| m.user_id == user_id)
            .cloned())
    }

    async fn update_meeting(&self, meeting: &Meeting) -> StoreResult<Option<Meeting>> {
        let mut tables = self.tables.write().await;
        match tables.meetings.get_mut(&meeting.id) {
            Some(row) if row.user_id == meeting.user_id => {
                // Owner and creation time are fixed.
                *row = Meeting {
                    user_id: row.user_id.clone(),
                    created_at: row.created_at,
                    ..meeting.clone()
                };
                Ok(Some(row.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn list_meetings(&self, user_id: &str) -> StoreResult<Vec<Meeting>> {
        let tables = self.tables.read().await;
        let mut meetings: Vec<Meeting> = tables
            .meetings
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        meetings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(meetings)
    }

    async fn delete_meeting(&self, id: &str, user_id: &str) -> StoreResult<Option<Meeting>> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .meetings
            .get(id)
            .is_some_and(|m| m.user_id == user_id);
        if !owned {
            return Ok(None);
        }
        let removed = tables.meetings.remove(id);
        tables.sections.retain(|_, s| s.meeting_id != id);
        tables.action_items.retain(|_, a| a.meeting_id != id);
        Ok(removed)
    }

    async fn insert_section(&self, section: &MeetingSection) -> StoreResult<MeetingSection> {
        let mut tables = self.tables.write().await;
        if tables.sections.contains_key(&section.id) {
            return Err(StoreError::Conflict(section.id.clone()));
        }
        tables.sections.insert(section.id.clone(), section.clone());
        Ok(section.clone())
    }

    async fn find_section(&self, id: &str) -> StoreResult<Option<MeetingSection>> {
        Ok(self.tables.read().await.sections.get(id).cloned())
    }

    async fn update_section(
        &self,
        section: &MeetingSection,
    ) -> StoreResult<Option<MeetingSection>> {
        let mut tables = self.tables.write().await;
        match tables.sections.get_mut(&section.id) {
            Some(row) if row.meeting_id == section.meeting_id => {
                *row = section.clone();
                Ok(Some(row.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn list_sections(&self, meeting_id: &str) -> StoreResult<Vec<MeetingSection>> {
        let tables = self.tables.read().await;
        let mut sections: Vec<MeetingSection> = tables
            .sections
            .values()
            .filter(|s| s.meeting_id == meeting_id)
            .cloned()
            .collect();
        sections.sort_by(|a, b| {
            a.order_index
                .cmp(&b.order_index)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });
        Ok(sections)
    }

    async fn delete_section(
        &self,
        id: &str,
        meeting_id: &str,
    ) -> StoreResult<Option<MeetingSection>> {
        let mut tables = self.tables.write().await;
        let matches = tables
            .sections
            .get(id)
            .is_some_and(|s| s.meeting_id == meeting_id);
        Ok(if matches {
            tables.sections.remove(id)
        } else {
            None
        })
    }

    async fn insert_action_item(&self, item: &ActionItem) -> StoreResult<ActionItem> {
        let mut tables = self.tables.write().await;
        if tables.action_items.contains_key(&item.id) {
            return Err(StoreError::Conflict(item.id.clone()));
        }
        tables.action_items.insert(item.id.clone(), item.clone());
        Ok(item.clone())
    }

    async fn find_action_item(&self, id: &str) -> StoreResult<Option<ActionItem>> {
        Ok(self.tables.read().await.action_items.get(id).cloned())
    }

    async fn update_action_item(&self, item: &ActionItem) -> StoreResult<Option<ActionItem>> {
        let mut tables = self.tables.write().await;
        match tables.action_items.get_mut(&item.id) {
            Some(row) if row.meeting_id == item.meeting_id => {
                *row = item.clone();
                Ok(Some(row.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn list_action_items(&self, meeting_ids: &[String]) -> StoreResult<Vec<ActionItem>> {
        let tables = self.tables.read().await;
        let mut items: Vec<ActionItem> = tables
            .action_items
            .values()
            .filter(|a| meeting_ids.contains(&a.meeting_id))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn delete_action_item(
        &self,
        id: &str,
        meeting_id: &str,
    ) -> StoreResult<Option<ActionItem>> {
        let mut tables = self.tables.write().await;
        let matches = tables
            .action_items
            .get(id)
            .is_some_and(|a| a.meeting_id == meeting_id);
        Ok(if matches {
            tables.action_items.remove(id)
        } else {
            None
        })
    }
}
