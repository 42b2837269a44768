use serde::{Deserialize, Serialize};

/// Body sent to the scoring service. Fields that did not parse go out as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub mood: Option<i64>,
    pub screen_time: Option<f64>,
    pub typing_speed: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub stress_score: f64,
    pub intervention: String,
}

/// Raw field values as the page holds them, before any parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInFields {
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub screen_time: String,
    #[serde(default)]
    pub typing_speed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodOptionView {
    pub emoji: String,
    pub label: String,
    pub value: i64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub options: Vec<MoodOptionView>,
    pub mood: String,
    pub screen_time: String,
    pub screen_time_label: String,
    pub typing_speed: String,
    pub score_text: String,
    pub intervention_text: String,
    pub marker_left: String,
    pub category_text: String,
    pub result_visible: bool,
    pub error_visible: bool,
    pub error_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub scoring_url: String,
}
