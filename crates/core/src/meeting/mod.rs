pub mod input;
pub mod model;
pub mod validate;

pub use model::{generate_id, ActionItem, Meeting, MeetingDetail, MeetingSection, UserId};
