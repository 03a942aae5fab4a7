use std::sync::Arc;

use meeting_notes_core::auth::TokenVerifier;
use meeting_notes_core::store::MeetingStore;
use meeting_notes_core::MeetingService;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    service: MeetingService,
    verifier: TokenVerifier,
    config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn MeetingStore>, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState {
                service: MeetingService::new(store),
                verifier: TokenVerifier::new(&config.jwt_secret),
                config,
            }),
        }
    }

    pub fn service(&self) -> &MeetingService {
        &self.inner.service
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.inner.verifier
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }
}
