pub mod health;
pub mod rpc;

use axum::Router;

use crate::middleware;
use crate::state::AppState;

/// Assemble the full router with all route groups and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = state.config();
    let cors = middleware::cors::cors_layer(&config.cors_allowed_origins);
    let body_limit = middleware::body_limit_layer(config.max_body_bytes);

    Router::new()
        .merge(health::routes())
        .merge(rpc::routes())
        .layer(body_limit)
        .layer(middleware::request_tracing::trace_layer())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use chrono::Duration;
    use meeting_notes_core::meeting::UserId;
    use meeting_notes_core::store::MemoryStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    struct TestApp {
        router: Router,
        state: AppState,
    }

    impl TestApp {
        fn new() -> Self {
            let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::for_tests());
            Self {
                router: build_router(state.clone()),
                state,
            }
        }

        fn token(&self, user: &str) -> String {
            self.state
                .verifier()
                .issue(&UserId::new(user), Duration::minutes(5))
                .unwrap()
        }

        async fn call(&self, operation: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
            let mut request = Request::post(format!("/v1/rpc/{operation}"))
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(token) = token {
                request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            let request = request.body(Body::from(body.to_string())).unwrap();

            let response = self.router.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, value)
        }
    }

    #[tokio::test]
    async fn ping_needs_no_auth() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::get("/v1/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_reports_memory_storage() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn missing_or_bad_token_is_unauthorized() {
        let app = TestApp::new();

        let (status, body) = app.call("createMeeting", None, json!({ "title": "Standup" })).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "unauthorized");
        assert_eq!(body["error"]["statusCode"], 401);

        let (status, _) = app
            .call("listMeetings", Some("not-a-token"), json!({}))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn empty_title_is_bad_request() {
        let app = TestApp::new();
        let token = app.token("alice");

        let (status, body) = app
            .call("createMeeting", Some(token.as_str()), json!({ "title": "" }))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "badRequest");

        let (_, meetings) = app.call("listMeetings", Some(token.as_str()), json!({})).await;
        assert_eq!(meetings, json!([]));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = TestApp::new();
        let token = app.token("alice");

        let (status, body) = app
            .call(
                "saveSection",
                Some(token.as_str()),
                json!({ "meetingId": "m1", "type": "notes", "orderIndex": "first", "content": "hi" }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "badRequest");
    }

    #[tokio::test]
    async fn standup_scenario_over_http() {
        let app = TestApp::new();
        let alice = app.token("alice");
        let bob = app.token("bob");

        let (status, meeting) = app
            .call("createMeeting", Some(alice.as_str()), json!({ "id": "m1", "title": "Standup" }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(meeting["id"], "m1");
        assert_eq!(meeting["userId"], "alice");

        let (status, section) = app
            .call(
                "saveSection",
                Some(alice.as_str()),
                json!({ "meetingId": "m1", "type": "notes", "orderIndex": 1, "content": "hi" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let section_id = section["id"].as_str().unwrap().to_string();
        assert!(section["createdAt"].is_string());

        let (status, replaced) = app
            .call(
                "saveSection",
                Some(alice.as_str()),
                json!({
                    "id": section_id,
                    "meetingId": "m1",
                    "type": "notes",
                    "orderIndex": 1,
                    "content": "bye",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(replaced["id"], section_id.as_str());
        assert_eq!(replaced["content"], "bye");

        let (status, body) = app.call("deleteMeeting", Some(bob.as_str()), json!({ "id": "m1" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "notFound");

        let (status, detail) = app.call("getMeeting", Some(alice.as_str()), json!({ "id": "m1" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["sections"][0]["content"], "bye");
    }

    #[tokio::test]
    async fn duplicate_id_conflicts() {
        let app = TestApp::new();
        let alice = app.token("alice");

        let (status, _) = app
            .call("createMeeting", Some(alice.as_str()), json!({ "id": "m1", "title": "One" }))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = app
            .call("createMeeting", Some(alice.as_str()), json!({ "id": "m1", "title": "Two" }))
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["type"], "conflict");
        assert!(!body["error"]["message"].as_str().unwrap().contains("m1"));
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let app = TestApp::new();
        let alice = app.token("alice");
        let limit = app.state.config().max_body_bytes;

        let (status, body) = app
            .call(
                "createMeeting",
                Some(alice.as_str()),
                json!({ "title": "x".repeat(limit + 1) }),
            )
            .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["type"], "payloadTooLarge");
        assert_eq!(body["error"]["statusCode"], 413);

        let (_, meetings) = app.call("listMeetings", Some(alice.as_str()), json!({})).await;
        assert_eq!(meetings, json!([]));
    }

    #[tokio::test]
    async fn action_items_scoped_to_caller() {
        let app = TestApp::new();
        let alice = app.token("alice");
        let bob = app.token("bob");

        app.call("createMeeting", Some(alice.as_str()), json!({ "id": "a1", "title": "Plan" }))
            .await;
        app.call("createMeeting", Some(bob.as_str()), json!({ "id": "b1", "title": "Bob's" }))
            .await;

        let (status, item) = app
            .call(
                "saveActionItem",
                Some(alice.as_str()),
                json!({ "meetingId": "a1", "description": "write doc", "status": "open" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["status"], "open");

        let (status, _) = app
            .call(
                "saveActionItem",
                Some(bob.as_str()),
                json!({ "meetingId": "b1", "description": "private" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let (_, items) = app.call("listActionItems", Some(alice.as_str()), json!({})).await;
        assert_eq!(items.as_array().unwrap().len(), 1);
        assert_eq!(items[0]["description"], "write doc");

        let (status, _) = app
            .call("listActionItems", Some(alice.as_str()), json!({ "meetingId": "b1" }))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
