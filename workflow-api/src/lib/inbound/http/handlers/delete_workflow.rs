use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::workflow::errors::WorkflowError;
use crate::workflow::models::WorkflowId;

pub async fn delete_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let workflow_id = WorkflowId::from_string(&id).map_err(WorkflowError::from)?;

    state
        .workflow_service
        .delete_workflow(&workflow_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
