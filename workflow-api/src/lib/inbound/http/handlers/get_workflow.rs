use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::workflow::errors::WorkflowError;
use crate::workflow::models::Workflow;
use crate::workflow::models::WorkflowId;

pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<WorkflowData>, ApiError> {
    let workflow_id = WorkflowId::from_string(&id).map_err(WorkflowError::from)?;

    state
        .workflow_service
        .get_workflow(&workflow_id)
        .await
        .map_err(ApiError::from)
        .map(|ref workflow| ApiSuccess::new(StatusCode::OK, workflow.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Workflow> for WorkflowData {
    fn from(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id.to_string(),
            name: workflow.name.as_str().to_string(),
            description: workflow.description.clone(),
            is_active: workflow.is_active,
            created_at: workflow.created_at,
            updated_at: workflow.updated_at,
        }
    }
}
