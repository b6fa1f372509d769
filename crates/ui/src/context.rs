use std::sync::Arc;

use services::audio::AudioPlayer;
use services::{ProfileService, ResultService, ScreeningService};

/// What the composition root must provide to the views.
pub trait UiApp: Send + Sync {
    fn screening(&self) -> Arc<ScreeningService>;
    fn results(&self) -> Arc<ResultService>;
    fn profile(&self) -> Arc<ProfileService>;
    fn audio(&self) -> Arc<dyn AudioPlayer>;
}

#[derive(Clone)]
pub struct AppContext {
    screening: Arc<ScreeningService>,
    results: Arc<ResultService>,
    profile: Arc<ProfileService>,
    audio: Arc<dyn AudioPlayer>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            screening: app.screening(),
            results: app.results(),
            profile: app.profile(),
            audio: app.audio(),
        }
    }

    #[must_use]
    pub fn screening(&self) -> Arc<ScreeningService> {
        Arc::clone(&self.screening)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn audio(&self) -> Arc<dyn AudioPlayer> {
        Arc::clone(&self.audio)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
