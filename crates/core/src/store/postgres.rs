use async_trait::async_trait;
use sqlx::PgPool;

use super::{MeetingStore, StoreResult};
use crate::error::StoreError;
use crate::meeting::{ActionItem, Meeting, MeetingSection};

const MEETING_COLUMNS: &str = "id, user_id, title, source_type, source_url, scheduled_at, \
     duration_minutes, created_at, updated_at";
const SECTION_COLUMNS: &str = "id, meeting_id, section_type, order_index, content, created_at";
const ACTION_ITEM_COLUMNS: &str =
    "id, meeting_id, assignee, description, due_date, status, created_at, updated_at";

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map unique violations on insert to [`StoreError::Conflict`].
fn insert_error(id: &str, err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Conflict(id.to_string())
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl MeetingStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_meeting(&self, meeting: &Meeting) -> StoreResult<Meeting> {
        let sql = format!(
            "INSERT INTO meetings ({MEETING_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {MEETING_COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&sql)
            .bind(&meeting.id)
            .bind(&meeting.user_id)
            .bind(&meeting.title)
            .bind(&meeting.source_type)
            .bind(&meeting.source_url)
            .bind(meeting.scheduled_at)
            .bind(meeting.duration_minutes)
            .bind(meeting.created_at)
            .bind(meeting.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| insert_error(&meeting.id, e))
    }

    async fn find_meeting(&self, id: &str, user_id: &str) -> StoreResult<Option<Meeting>> {
        let sql = format!("SELECT {MEETING_COLUMNS} FROM meetings WHERE id = $1 AND user_id = $2");
        Ok(sqlx::query_as::<_, Meeting>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_meeting(&self, meeting: &Meeting) -> StoreResult<Option<Meeting>> {
        let sql = format!(
            "UPDATE meetings SET title = $3, source_type = $4, source_url = $5, \
             scheduled_at = $6, duration_minutes = $7, updated_at = $8 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {MEETING_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Meeting>(&sql)
            .bind(&meeting.id)
            .bind(&meeting.user_id)
            .bind(&meeting.title)
            .bind(&meeting.source_type)
            .bind(&meeting.source_url)
            .bind(meeting.scheduled_at)
            .bind(meeting.duration_minutes)
            .bind(meeting.updated_at)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_meetings(&self, user_id: &str) -> StoreResult<Vec<Meeting>> {
        let sql = format!(
            "SELECT {MEETING_COLUMNS} FROM meetings WHERE user_id = $1 \
             ORDER BY created_at DESC, id"
        );
        Ok(sqlx::query_as::<_, Meeting>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn delete_meeting(&self, id: &str, user_id: &str) -> StoreResult<Option<Meeting>> {
        let sql = format!(
            "DELETE FROM meetings WHERE id = $1 AND user_id = $2 RETURNING {MEETING_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Meeting>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_section(&self, section: &MeetingSection) -> StoreResult<MeetingSection> {
        let sql = format!(
            "INSERT INTO meeting_sections ({SECTION_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, MeetingSection>(&sql)
            .bind(&section.id)
            .bind(&section.meeting_id)
            .bind(&section.section_type)
            .bind(section.order_index)
            .bind(&section.content)
            .bind(section.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| insert_error(&section.id, e))
    }

    async fn find_section(&self, id: &str) -> StoreResult<Option<MeetingSection>> {
        let sql = format!("SELECT {SECTION_COLUMNS} FROM meeting_sections WHERE id = $1");
        Ok(sqlx::query_as::<_, MeetingSection>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_section(
        &self,
        section: &MeetingSection,
    ) -> StoreResult<Option<MeetingSection>> {
        let sql = format!(
            "UPDATE meeting_sections SET section_type = $3, order_index = $4, content = $5, \
             created_at = $6 \
             WHERE id = $1 AND meeting_id = $2 \
             RETURNING {SECTION_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, MeetingSection>(&sql)
            .bind(&section.id)
            .bind(&section.meeting_id)
            .bind(&section.section_type)
            .bind(section.order_index)
            .bind(&section.content)
            .bind(section.created_at)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_sections(&self, meeting_id: &str) -> StoreResult<Vec<MeetingSection>> {
        let sql = format!(
            "SELECT {SECTION_COLUMNS} FROM meeting_sections WHERE meeting_id = $1 \
             ORDER BY order_index, created_at, id"
        );
        Ok(sqlx::query_as::<_, MeetingSection>(&sql)
            .bind(meeting_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn delete_section(
        &self,
        id: &str,
        meeting_id: &str,
    ) -> StoreResult<Option<MeetingSection>> {
        let sql = format!(
            "DELETE FROM meeting_sections WHERE id = $1 AND meeting_id = $2 \
             RETURNING {SECTION_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, MeetingSection>(&sql)
            .bind(id)
            .bind(meeting_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_action_item(&self, item: &ActionItem) -> StoreResult<ActionItem> {
        let sql = format!(
            "INSERT INTO action_items ({ACTION_ITEM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ACTION_ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ActionItem>(&sql)
            .bind(&item.id)
            .bind(&item.meeting_id)
            .bind(&item.assignee)
            .bind(&item.description)
            .bind(item.due_date)
            .bind(&item.status)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| insert_error(&item.id, e))
    }

    async fn find_action_item(&self, id: &str) -> StoreResult<Option<ActionItem>> {
        let sql = format!("SELECT {ACTION_ITEM_COLUMNS} FROM action_items WHERE id = $1");
        Ok(sqlx::query_as::<_, ActionItem>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn update_action_item(&self, item: &ActionItem) -> StoreResult<Option<ActionItem>> {
        let sql = format!(
            "UPDATE action_items SET assignee = $3, description = $4, due_date = $5, \
             status = $6, created_at = $7, updated_at = $8 \
             WHERE id = $1 AND meeting_id = $2 \
             RETURNING {ACTION_ITEM_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, ActionItem>(&sql)
            .bind(&item.id)
            .bind(&item.meeting_id)
            .bind(&item.assignee)
            .bind(&item.description)
            .bind(item.due_date)
            .bind(&item.status)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_action_items(&self, meeting_ids: &[String]) -> StoreResult<Vec<ActionItem>> {
        if meeting_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {ACTION_ITEM_COLUMNS} FROM action_items WHERE meeting_id = ANY($1) \
             ORDER BY created_at, id"
        );
        Ok(sqlx::query_as::<_, ActionItem>(&sql)
            .bind(meeting_ids)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn delete_action_item(
        &self,
        id: &str,
        meeting_id: &str,
    ) -> StoreResult<Option<ActionItem>> {
        let sql = format!(
            "DELETE FROM action_items WHERE id = $1 AND meeting_id = $2 \
             RETURNING {ACTION_ITEM_COLUMNS}"
        );
        Ok(sqlx::query_as::<_, ActionItem>(&sql)
            .bind(id)
            .bind(meeting_id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
