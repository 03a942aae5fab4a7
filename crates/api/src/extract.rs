use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use meeting_notes_core::meeting::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The identity behind a request, if any.
///
/// Never rejects: a missing, malformed or invalid bearer token resolves to
/// `None` and the handler set answers `Unauthorized` where it matters.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<UserId>);

impl Caller {
    pub fn user(&self) -> Option<&UserId> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(authorization)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(Caller(None));
        };

        match state.verifier().verify(authorization.token()) {
            Ok(user) => Ok(Caller(Some(user))),
            Err(err) => {
                tracing::debug!("rejected bearer token: {err}");
                Ok(Caller(None))
            }
        }
    }
}

/// `Json` with rejections rendered as [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
