//! Domain core for the meeting notes service: meetings, their sections and
//! action items, every operation scoped to the calling user.

pub mod auth;
pub mod error;
pub mod meeting;
pub mod service;
pub mod store;

pub use error::{ServiceError, ServiceResult, StoreError};
pub use service::MeetingService;
