//! Named remote procedures, one `POST /v1/rpc/{operation}` route each.

use axum::{extract::State, routing::post, Json, Router};
use meeting_notes_core::meeting::input::{
    ChildIdInput, CreateMeetingInput, ListActionItemsInput, ListSectionsInput, MeetingIdInput,
    SaveActionItemInput, SaveSectionInput, UpdateMeetingInput,
};
use meeting_notes_core::meeting::{ActionItem, Meeting, MeetingDetail, MeetingSection};

use crate::error::ApiResult;
use crate::extract::{ApiJson, Caller};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/rpc/createMeeting", post(create_meeting))
        .route("/v1/rpc/updateMeeting", post(update_meeting))
        .route("/v1/rpc/listMeetings", post(list_meetings))
        .route("/v1/rpc/deleteMeeting", post(delete_meeting))
        .route("/v1/rpc/getMeeting", post(get_meeting))
        .route("/v1/rpc/saveSection", post(save_section))
        .route("/v1/rpc/deleteSection", post(delete_section))
        .route("/v1/rpc/listSections", post(list_sections))
        .route("/v1/rpc/saveActionItem", post(save_action_item))
        .route("/v1/rpc/deleteActionItem", post(delete_action_item))
        .route("/v1/rpc/listActionItems", post(list_action_items))
}

async fn create_meeting(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<CreateMeetingInput>,
) -> ApiResult<Json<Meeting>> {
    Ok(Json(state.service().create_meeting(caller.user(), input).await?))
}

async fn update_meeting(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<UpdateMeetingInput>,
) -> ApiResult<Json<Meeting>> {
    Ok(Json(state.service().update_meeting(caller.user(), input).await?))
}

async fn list_meetings(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Json<Vec<Meeting>>> {
    Ok(Json(state.service().list_meetings(caller.user()).await?))
}

async fn delete_meeting(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<MeetingIdInput>,
) -> ApiResult<Json<Meeting>> {
    Ok(Json(state.service().delete_meeting(caller.user(), input).await?))
}

async fn get_meeting(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<MeetingIdInput>,
) -> ApiResult<Json<MeetingDetail>> {
    Ok(Json(state.service().get_meeting(caller.user(), input).await?))
}

async fn save_section(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<SaveSectionInput>,
) -> ApiResult<Json<MeetingSection>> {
    Ok(Json(state.service().save_section(caller.user(), input).await?))
}

async fn delete_section(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<ChildIdInput>,
) -> ApiResult<Json<MeetingSection>> {
    Ok(Json(state.service().delete_section(caller.user(), input).await?))
}

async fn list_sections(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<ListSectionsInput>,
) -> ApiResult<Json<Vec<MeetingSection>>> {
    Ok(Json(state.service().list_sections(caller.user(), input).await?))
}

async fn save_action_item(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<SaveActionItemInput>,
) -> ApiResult<Json<ActionItem>> {
    Ok(Json(state.service().save_action_item(caller.user(), input).await?))
}

async fn delete_action_item(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<ChildIdInput>,
) -> ApiResult<Json<ActionItem>> {
    Ok(Json(state.service().delete_action_item(caller.user(), input).await?))
}

async fn list_action_items(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(input): ApiJson<ListActionItemsInput>,
) -> ApiResult<Json<Vec<ActionItem>>> {
    Ok(Json(state.service().list_action_items(caller.user(), input).await?))
}
