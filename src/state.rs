use crate::config::Settings;
use crate::scoring::HttpScoringBackend;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub backend: HttpScoringBackend,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let backend = HttpScoringBackend::new(settings.scoring_url.clone());
        Self {
            settings: Arc::new(settings),
            backend,
        }
    }
}
