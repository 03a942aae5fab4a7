//! Storage collaborator for the handler set.
//!
//! Implementations perform plain data access. Ownership rules live in
//! [`MeetingService`](crate::service::MeetingService); the only owner-aware
//! calls here are the meeting lookups that take a `user_id` filter.
//!
//! Deleting a meeting removes its sections and action items.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::meeting::{ActionItem, Meeting, MeetingSection};

pub use memory::MemoryStore;
pub use postgres::PgStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait MeetingStore: Send + Sync {
    /// Cheap reachability check used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;

    async fn insert_meeting(&self, meeting: &Meeting) -> StoreResult<Meeting>;

    async fn find_meeting(&self, id: &str, user_id: &str) -> StoreResult<Option<Meeting>>;

    /// Overwrite the row matching `meeting.id` and `meeting.user_id`.
    async fn update_meeting(&self, meeting: &Meeting) -> StoreResult<Option<Meeting>>;

    /// Newest first.
    async fn list_meetings(&self, user_id: &str) -> StoreResult<Vec<Meeting>>;

    async fn delete_meeting(&self, id: &str, user_id: &str) -> StoreResult<Option<Meeting>>;

    async fn insert_section(&self, section: &MeetingSection) -> StoreResult<MeetingSection>;

    async fn find_section(&self, id: &str) -> StoreResult<Option<MeetingSection>>;

    /// Overwrite the row matching `section.id` and `section.meeting_id`.
    async fn update_section(&self, section: &MeetingSection)
        -> StoreResult<Option<MeetingSection>>;

    /// Ordered by `order_index`, then `created_at`.
    async fn list_sections(&self, meeting_id: &str) -> StoreResult<Vec<MeetingSection>>;

    async fn delete_section(&self, id: &str, meeting_id: &str)
        -> StoreResult<Option<MeetingSection>>;

    async fn insert_action_item(&self, item: &ActionItem) -> StoreResult<ActionItem>;

    async fn find_action_item(&self, id: &str) -> StoreResult<Option<ActionItem>>;

    /// Overwrite the row matching `item.id` and `item.meeting_id`.
    async fn update_action_item(&self, item: &ActionItem) -> StoreResult<Option<ActionItem>>;

    /// Items belonging to any of `meeting_ids`, oldest first.
    async fn list_action_items(&self, meeting_ids: &[String]) -> StoreResult<Vec<ActionItem>>;

    async fn delete_action_item(&self, id: &str, meeting_id: &str)
        -> StoreResult<Option<ActionItem>>;
}
