//! Field-level validation run before any data access.
use thiserror::Error;

use super::input::{
    ChildIdInput, CreateMeetingInput, ListActionItemsInput, ListSectionsInput, MeetingIdInput,
    SaveActionItemInput, SaveSectionInput, UpdateMeetingInput,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}

fn non_empty_opt(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(value) => non_empty(field, value),
        None => Ok(()),
    }
}

fn positive(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(())
}

fn positive_opt(field: &'static str, value: Option<i32>) -> Result<(), ValidationError> {
    match value {
        Some(value) => positive(field, value),
        None => Ok(()),
    }
}

impl Validate for CreateMeetingInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_opt("id", self.id.as_deref())?;
        non_empty("title", &self.title)?;
        positive_opt("durationMinutes", self.duration_minutes)
    }
}

impl Validate for UpdateMeetingInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("id", &self.id)?;
        non_empty_opt("title", self.title.as_deref())?;
        positive_opt("durationMinutes", self.duration_minutes)
    }
}

impl Validate for MeetingIdInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("id", &self.id)
    }
}

impl Validate for SaveSectionInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_opt("id", self.id.as_deref())?;
        non_empty("meetingId", &self.meeting_id)?;
        non_empty("type", &self.section_type)?;
        positive("orderIndex", self.order_index)?;
        non_empty("content", &self.content)
    }
}

impl Validate for SaveActionItemInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_opt("id", self.id.as_deref())?;
        non_empty("meetingId", &self.meeting_id)?;
        non_empty("description", &self.description)
    }
}

impl Validate for ChildIdInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("id", &self.id)?;
        non_empty("meetingId", &self.meeting_id)
    }
}

impl Validate for ListSectionsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty("meetingId", &self.meeting_id)
    }
}

impl Validate for ListActionItemsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        non_empty_opt("meetingId", self.meeting_id.as_deref())
    }
}
