use crate::errors::SubmitError;
use crate::models::{ScoreResult, SubmissionPayload};
use reqwest::Client;
use std::future::Future;

pub const DEFAULT_SCORING_URL: &str = "http://127.0.0.1:8000/stress";

/// Remote service that turns a check-in into a stress score.
pub trait ScoringBackend {
    fn score(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<ScoreResult, SubmitError>> + Send;
}

/// Posts the payload as JSON and decodes whatever body comes back. The
/// status code is ignored; no timeout, no retries.
#[derive(Debug, Clone)]
pub struct HttpScoringBackend {
    client: Client,
    url: String,
}

impl HttpScoringBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl ScoringBackend for HttpScoringBackend {
    async fn score(&self, payload: &SubmissionPayload) -> Result<ScoreResult, SubmitError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
