use crate::dashboard::{mood_chart, MoodChart};
use crate::errors::AppError;
use crate::form::FormController;
use crate::models::{CheckInFields, FormView, StatusResponse};
use crate::state::AppState;
use crate::ui::{render_dashboard, render_index};
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    response::Html,
    Form, Json,
};

pub async fn index() -> Html<String> {
    Html(render_index(&FormController::new().view()))
}

pub async fn check_in_form(
    State(state): State<AppState>,
    fields: Result<Form<CheckInFields>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(fields) = fields?;
    let view = run_check_in(&state, &fields).await;
    Ok(Html(render_index(&view)))
}

pub async fn api_check_in(
    State(state): State<AppState>,
    fields: Result<Json<CheckInFields>, JsonRejection>,
) -> Result<Json<FormView>, AppError> {
    let Json(fields) = fields?;
    Ok(Json(run_check_in(&state, &fields).await))
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "ZenFlow check-in is running.".to_string(),
        scoring_url: state.settings.scoring_url.clone(),
    })
}

pub async fn dashboard() -> Html<String> {
    Html(render_dashboard(&mood_chart()))
}

pub async fn api_dashboard() -> Json<MoodChart> {
    Json(mood_chart())
}

async fn run_check_in(state: &AppState, fields: &CheckInFields) -> FormView {
    let mut form = FormController::from_fields(fields);
    form.submit(&state.backend).await;
    form.view()
}
