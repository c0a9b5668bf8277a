use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::workflow::errors::WorkflowError;
use crate::domain::workflow::models::CreateWorkflowCommand;
use crate::domain::workflow::models::UpdateWorkflowCommand;
use crate::domain::workflow::models::Workflow;
use crate::domain::workflow::models::WorkflowId;
use crate::domain::workflow::ports::WorkflowRepository;
use crate::domain::workflow::ports::WorkflowServicePort;

/// Domain service for workflow CRUD.
pub struct WorkflowService<WR>
where
    WR: WorkflowRepository,
{
    repository: Arc<WR>,
}

impl<WR> WorkflowService<WR>
where
    WR: WorkflowRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }

    async fn find_existing(&self, id: &WorkflowId) -> Result<Workflow, WorkflowError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(WorkflowError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl<WR> WorkflowServicePort for WorkflowService<WR>
where
    WR: WorkflowRepository,
{
    async fn create_workflow(
        &self,
        command: CreateWorkflowCommand,
    ) -> Result<Workflow, WorkflowError> {
        let workflow = self
            .repository
            .create(Workflow::new(command, Utc::now()))
            .await?;

        tracing::info!(workflow_id = %workflow.id, name = %workflow.name, "Workflow created");

        Ok(workflow)
    }

    async fn get_workflow(&self, id: &WorkflowId) -> Result<Workflow, WorkflowError> {
        self.find_existing(id).await
    }

    async fn list_workflows(&self) -> Result<Vec<Workflow>, WorkflowError> {
        self.repository.list_all().await
    }

    async fn update_workflow(
        &self,
        id: &WorkflowId,
        command: UpdateWorkflowCommand,
    ) -> Result<Workflow, WorkflowError> {
        let mut workflow = self.find_existing(id).await?;
        workflow.replace(command, Utc::now());

        let workflow = self.repository.update(workflow).await?;

        tracing::info!(workflow_id = %workflow.id, "Workflow updated");

        Ok(workflow)
    }

    async fn delete_workflow(&self, id: &WorkflowId) -> Result<(), WorkflowError> {
        self.find_existing(id).await?;
        self.repository.delete(id).await?;

        tracing::info!(workflow_id = %id, "Workflow deleted");

        Ok(())
    }
}
