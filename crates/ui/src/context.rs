use std::sync::Arc;

use services::ExportService;

/// What the composition root (e.g. `crates/app`) provides to the UI.
pub trait UiApp: Send + Sync {
    fn export_service(&self) -> Arc<ExportService>;
}

#[derive(Clone)]
pub struct AppContext {
    export_service: Arc<ExportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            export_service: app.export_service(),
        }
    }

    #[must_use]
    pub fn export_service(&self) -> Arc<ExportService> {
        Arc::clone(&self.export_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
