use chrono::Utc;

use super::MeetingService;
use crate::error::{ServiceError, ServiceResult};
use crate::meeting::input::{ChildIdInput, ListActionItemsInput, SaveActionItemInput};
use crate::meeting::{generate_id, ActionItem, UserId};

impl MeetingService {
    /// Insert when `input.id` is absent. Otherwise replace every field of the
    /// item, so omitted optional fields are cleared, and restamp both
    /// timestamps.
    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty, meeting_id = %input.meeting_id))]
    pub async fn save_action_item(
        &self,
        caller: Option<&UserId>,
        input: SaveActionItemInput,
    ) -> ServiceResult<ActionItem> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));
        let meeting = self.owned_meeting(user, &input.meeting_id).await?;

        let now = Utc::now();
        let mut item = ActionItem {
            id: String::new(),
            meeting_id: meeting.id,
            assignee: input.assignee,
            description: input.description,
            due_date: input.due_date,
            status: input.status,
            created_at: now,
            updated_at: now,
        };

        match input.id {
            Some(id) => {
                self.store
                    .find_action_item(&id)
                    .await?
                    .filter(|existing| existing.meeting_id == item.meeting_id)
                    .ok_or(ServiceError::NotFound("action item"))?;

                item.id = id;
                let saved = self
                    .store
                    .update_action_item(&item)
                    .await?
                    .ok_or(ServiceError::NotFound("action item"))?;
                tracing::info!(action_item_id = %saved.id, "action item replaced");
                Ok(saved)
            }
            None => {
                item.id = generate_id();
                let saved = self.store.insert_action_item(&item).await?;
                tracing::info!(action_item_id = %saved.id, "action item created");
                Ok(saved)
            }
        }
    }

    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty, meeting_id = %input.meeting_id, action_item_id = %input.id))]
    pub async fn delete_action_item(
        &self,
        caller: Option<&UserId>,
        input: ChildIdInput,
    ) -> ServiceResult<ActionItem> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));
        let meeting = self.owned_meeting(user, &input.meeting_id).await?;

        let deleted = self
            .store
            .delete_action_item(&input.id, &meeting.id)
            .await?
            .ok_or(ServiceError::NotFound("action item"))?;
        tracing::info!("action item deleted");
        Ok(deleted)
    }

    /// Items across every meeting the caller owns, or only `input.meeting_id`.
    pub async fn list_action_items(
        &self,
        caller: Option<&UserId>,
        input: ListActionItemsInput,
    ) -> ServiceResult<Vec<ActionItem>> {
        let user = Self::authorize(caller, &input)?;

        let owned: Vec<String> = self
            .store
            .list_meetings(user.as_str())
            .await?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let scope = match input.meeting_id {
            Some(meeting_id) if owned.contains(&meeting_id) => vec![meeting_id],
            Some(_) => return Err(ServiceError::NotFound("meeting")),
            None => owned,
        };

        Ok(self.store.list_action_items(&scope).await?)
    }
}
