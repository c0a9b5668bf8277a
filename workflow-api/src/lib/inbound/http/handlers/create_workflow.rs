use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::get_workflow::WorkflowData;
use super::parse_body;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::ValidationErrors;
use crate::workflow::models::CreateWorkflowCommand;
use crate::workflow::models::UpdateWorkflowCommand;
use crate::workflow::models::WorkflowName;

pub async fn create_workflow(
    State(state): State<AppState>,
    body: Result<Json<WorkflowRequest>, JsonRejection>,
) -> Result<ApiSuccess<WorkflowData>, ApiError> {
    let command = parse_body(body)?.try_into_create_command()?;

    state
        .workflow_service
        .create_workflow(command)
        .await
        .map_err(ApiError::from)
        .map(|ref workflow| {
            ApiSuccess::created(format!("/api/workflows/{}", workflow.id), workflow.into())
        })
}

/// HTTP request body for creating or replacing a workflow (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowRequest {
    name: String,
    description: Option<String>,
    is_active: bool,
}

impl Default for WorkflowRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            is_active: true,
        }
    }
}

impl WorkflowRequest {
    const MAX_DESCRIPTION_LENGTH: usize = 1000;

    fn validate(self) -> Result<(WorkflowName, Option<String>, bool), ApiError> {
        let mut errors = ValidationErrors::new();

        let name = if errors.required("name", "Name", &self.name) {
            WorkflowName::new(self.name)
                .map_err(|e| errors.add("name", e.to_string()))
                .ok()
        } else {
            None
        };
        if let Some(description) = &self.description {
            errors.max_length(
                "description",
                "Description",
                description,
                Self::MAX_DESCRIPTION_LENGTH,
            );
        }

        match name {
            Some(name) if errors.is_empty() => Ok((name, self.description, self.is_active)),
            _ => Err(ApiError::Validation(errors)),
        }
    }

    pub(super) fn try_into_create_command(self) -> Result<CreateWorkflowCommand, ApiError> {
        let (name, description, is_active) = self.validate()?;
        Ok(CreateWorkflowCommand {
            name,
            description,
            is_active,
        })
    }

    pub(super) fn try_into_update_command(self) -> Result<UpdateWorkflowCommand, ApiError> {
        let (name, description, is_active) = self.validate()?;
        Ok(UpdateWorkflowCommand {
            name,
            description,
            is_active,
        })
    }
}
