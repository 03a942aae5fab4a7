use chrono::Utc;

use super::MeetingService;
use crate::error::{ServiceError, ServiceResult};
use crate::meeting::input::{ChildIdInput, ListSectionsInput, SaveSectionInput};
use crate::meeting::{generate_id, MeetingSection, UserId};

impl MeetingService {
    /// Insert when `input.id` is absent. Otherwise replace the section's
    /// fields and restamp `created_at`; the section must already belong to
    /// `input.meeting_id`.
    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty, meeting_id = %input.meeting_id))]
    pub async fn save_section(
        &self,
        caller: Option<&UserId>,
        input: SaveSectionInput,
    ) -> ServiceResult<MeetingSection> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));
        let meeting = self.owned_meeting(user, &input.meeting_id).await?;

        let mut section = MeetingSection {
            id: String::new(),
            meeting_id: meeting.id,
            section_type: input.section_type,
            order_index: input.order_index,
            content: input.content,
            created_at: Utc::now(),
        };

        match input.id {
            Some(id) => {
                self.store
                    .find_section(&id)
                    .await?
                    .filter(|existing| existing.meeting_id == section.meeting_id)
                    .ok_or(ServiceError::NotFound("section"))?;

                section.id = id;
                let saved = self
                    .store
                    .update_section(&section)
                    .await?
                    .ok_or(ServiceError::NotFound("section"))?;
                tracing::info!(section_id = %saved.id, "section replaced");
                Ok(saved)
            }
            None => {
                section.id = generate_id();
                let saved = self.store.insert_section(&section).await?;
                tracing::info!(section_id = %saved.id, "section created");
                Ok(saved)
            }
        }
    }

    #[tracing::instrument(skip_all, fields(user = tracing::field::Empty, meeting_id = %input.meeting_id, section_id = %input.id))]
    pub async fn delete_section(
        &self,
        caller: Option<&UserId>,
        input: ChildIdInput,
    ) -> ServiceResult<MeetingSection> {
        let user = Self::authorize(caller, &input)?;
        tracing::Span::current().record("user", tracing::field::display(user));
        let meeting = self.owned_meeting(user, &input.meeting_id).await?;

        let deleted = self
            .store
            .delete_section(&input.id, &meeting.id)
            .await?
            .ok_or(ServiceError::NotFound("section"))?;
        tracing::info!("section deleted");
        Ok(deleted)
    }

    pub async fn list_sections(
        &self,
        caller: Option<&UserId>,
        input: ListSectionsInput,
    ) -> ServiceResult<Vec<MeetingSection>> {
        let user = Self::authorize(caller, &input)?;
        let meeting = self.owned_meeting(user, &input.meeting_id).await?;
        Ok(self.store.list_sections(&meeting.id).await?)
    }
}
