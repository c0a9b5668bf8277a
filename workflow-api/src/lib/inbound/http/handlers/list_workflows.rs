use axum::extract::State;
use axum::http::StatusCode;

use super::get_workflow::WorkflowData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_workflows(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<WorkflowData>>, ApiError> {
    state
        .workflow_service
        .list_workflows()
        .await
        .map_err(ApiError::from)
        .map(|workflows| {
            ApiSuccess::new(
                StatusCode::OK,
                workflows.iter().map(WorkflowData::from).collect(),
            )
        })
}
