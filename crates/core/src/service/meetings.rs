use chrono::Utc;

use super::MeetingService;
use crate::error::{ServiceError, ServiceResult};
use crate::meeting::input::{CreateMeetingInput, MeetingIdInput, UpdateMeetingInput};
use crate::meeting::{generate_id, Meeting, MeetingDetail, UserId};

impl MeetingService {
    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty))]
    pub async fn create_meeting(
        &self,
        caller: Option<&UserId>,
        input: CreateMeetingInput,
    ) -> ServiceResult<Meeting> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));

        let now = Utc::now();
        let meeting = Meeting {
            id: input.id.unwrap_or_else(generate_id),
            user_id: user.as_str().to_string(),
            title: input.title,
            source_type: input.source_type,
            source_url: input.source_url,
            scheduled_at: input.scheduled_at,
            duration_minutes: input.duration_minutes,
            created_at: now,
            updated_at: now,
        };

        let created = self.store.insert_meeting(&meeting).await?;
        tracing::info!(meeting_id = %created.id, "meeting created");
        Ok(created)
    }

    /// Partial patch. An input carrying only `id` returns the stored row as is.
    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty, meeting_id = %input.id))]
    pub async fn update_meeting(
        &self,
        caller: Option<&UserId>,
        input: UpdateMeetingInput,
    ) -> ServiceResult<Meeting> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));

        let mut meeting = self.owned_meeting(user, &input.id).await?;
        if input.is_empty() {
            tracing::debug!("empty patch, returning meeting unchanged");
            return Ok(meeting);
        }

        if let Some(title) = input.title {
            meeting.title = title;
        }
        if let Some(source_type) = input.source_type {
            meeting.source_type = Some(source_type);
        }
        if let Some(source_url) = input.source_url {
            meeting.source_url = Some(source_url);
        }
        if let Some(scheduled_at) = input.scheduled_at {
            meeting.scheduled_at = Some(scheduled_at);
        }
        if let Some(duration_minutes) = input.duration_minutes {
            meeting.duration_minutes = Some(duration_minutes);
        }
        meeting.updated_at = Utc::now();

        let updated = self
            .store
            .update_meeting(&meeting)
            .await?
            .ok_or(ServiceError::NotFound("meeting"))?;
        tracing::info!("meeting updated");
        Ok(updated)
    }

    pub async fn list_meetings(&self, caller: Option<&UserId>) -> ServiceResult<Vec<Meeting>> {
        let user = caller.ok_or(ServiceError::Unauthorized)?;
        Ok(self.store.list_meetings(user.as_str()).await?)
    }

    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty, meeting_id = %input.id))]
    pub async fn delete_meeting(
        &self,
        caller: Option<&UserId>,
        input: MeetingIdInput,
    ) -> ServiceResult<Meeting> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));

        let deleted = self
            .store
            .delete_meeting(&input.id, user.as_str())
            .await?
            .ok_or(ServiceError::NotFound("meeting"))?;
        tracing::info!("meeting deleted");
        Ok(deleted)
    }

    /// The meeting with its sections (display order) and action items.
    pub async fn get_meeting(
        &self,
        caller: Option<&UserId>,
        input: MeetingIdInput,
    ) -> ServiceResult<MeetingDetail> {
        let user = Self::authorize(caller, &input)?;
        let meeting = self.owned_meeting(user, &input.id).await?;

        let sections = self.store.list_sections(&meeting.id).await?;
        let action_items = self
            .store
            .list_action_items(std::slice::from_ref(&meeting.id))
            .await?;

        Ok(MeetingDetail {
            meeting,
            sections,
            action_items,
        })
    }
}
