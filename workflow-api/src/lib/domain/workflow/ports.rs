use async_trait::async_trait;

use crate::domain::workflow::errors::WorkflowError;
use crate::domain::workflow::models::CreateWorkflowCommand;
use crate::domain::workflow::models::UpdateWorkflowCommand;
use crate::domain::workflow::models::Workflow;
use crate::domain::workflow::models::WorkflowId;

/// Port for workflow domain service operations.
#[async_trait]
pub trait WorkflowServicePort: Send + Sync + 'static {
    async fn create_workflow(&self, command: CreateWorkflowCommand)
        -> Result<Workflow, WorkflowError>;

    /// # Errors
    /// * `NotFound` - Workflow does not exist
    async fn get_workflow(&self, id: &WorkflowId) -> Result<Workflow, WorkflowError>;

    async fn list_workflows(&self) -> Result<Vec<Workflow>, WorkflowError>;

    /// Replace name, description and active flag of an existing workflow.
    ///
    /// # Errors
    /// * `NotFound` - Workflow does not exist
    async fn update_workflow(
        &self,
        id: &WorkflowId,
        command: UpdateWorkflowCommand,
    ) -> Result<Workflow, WorkflowError>;

    /// # Errors
    /// * `NotFound` - Workflow does not exist
    async fn delete_workflow(&self, id: &WorkflowId) -> Result<(), WorkflowError>;
}

/// Persistence operations for workflows.
#[async_trait]
pub trait WorkflowRepository: Send + Sync + 'static {
    async fn create(&self, workflow: Workflow) -> Result<Workflow, WorkflowError>;

    async fn find_by_id(&self, id: &WorkflowId) -> Result<Option<Workflow>, WorkflowError>;

    async fn list_all(&self) -> Result<Vec<Workflow>, WorkflowError>;

    /// # Errors
    /// * `NotFound` - Workflow does not exist
    async fn update(&self, workflow: Workflow) -> Result<Workflow, WorkflowError>;

    /// # Errors
    /// * `NotFound` - Workflow does not exist
    async fn delete(&self, id: &WorkflowId) -> Result<(), WorkflowError>;
}
