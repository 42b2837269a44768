pub mod app;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod form;
pub mod gauge;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod scoring;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Settings;
pub use form::FormController;
pub use scoring::{HttpScoringBackend, ScoringBackend};
pub use state::AppState;
