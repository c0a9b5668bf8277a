use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::create_workflow::WorkflowRequest;
use super::parse_body;
use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::workflow::errors::WorkflowError;
use crate::workflow::models::WorkflowId;

pub async fn update_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<WorkflowRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let workflow_id = WorkflowId::from_string(&id).map_err(WorkflowError::from)?;
    let command = parse_body(body)?.try_into_update_command()?;

    state
        .workflow_service
        .update_workflow(&workflow_id, command)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
