//! The request handler set.
//!
//! Every operation takes the caller as an explicit `Option<&UserId>`, validates
//! its input, then resolves the caller. Anything touching a meeting or its
//! children goes through [`MeetingService::owned_meeting`], which filters by id
//! and owner at once: another user's meeting looks exactly like a missing one.

mod action_items;
mod meetings;
mod sections;

use std::sync::Arc;

use crate::error::{ServiceError, ServiceResult};
use crate::meeting::validate::Validate;
use crate::meeting::{Meeting, UserId};
use crate::store::MeetingStore;

#[derive(Clone)]
pub struct MeetingService {
    store: Arc<dyn MeetingStore>,
}

impl MeetingService {
    pub fn new(store: Arc<dyn MeetingStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn MeetingStore {
        self.store.as_ref()
    }

    /// Validate `input`, then resolve the caller.
    fn authorize<'a, I: Validate>(
        caller: Option<&'a UserId>,
        input: &I,
    ) -> ServiceResult<&'a UserId> {
        input.validate()?;
        caller.ok_or(ServiceError::Unauthorized)
    }

    /// Load the meeting `meeting_id` if `user` owns it.
    async fn owned_meeting(&self, user: &UserId, meeting_id: &str) -> ServiceResult<Meeting> {
        self.store
            .find_meeting(meeting_id, user.as_str())
            .await?
            .ok_or(ServiceError::NotFound("meeting"))
    }
}
