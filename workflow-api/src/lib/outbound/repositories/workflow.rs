use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::workflow::errors::WorkflowError;
use crate::domain::workflow::models::Workflow;
use crate::domain::workflow::models::WorkflowId;
use crate::domain::workflow::models::WorkflowName;
use crate::domain::workflow::ports::WorkflowRepository;

pub struct PostgresWorkflowRepository {
    pool: PgPool,
}

impl PostgresWorkflowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct WorkflowRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WorkflowRow> for Workflow {
    fn from(row: WorkflowRow) -> Self {
        Workflow {
            id: WorkflowId(row.id),
            name: WorkflowName::from_stored(row.name),
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> WorkflowError {
    WorkflowError::DatabaseError(e.to_string())
}

#[async_trait]
impl WorkflowRepository for PostgresWorkflowRepository {
    async fn create(&self, workflow: Workflow) -> Result<Workflow, WorkflowError> {
        sqlx::query(
            r#"
            INSERT INTO workflows (id, name, description, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(workflow.id.0)
        .bind(workflow.name.as_str())
        .bind(workflow.description.as_deref())
        .bind(workflow.is_active)
        .bind(workflow.created_at)
        .bind(workflow.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(workflow)
    }

    async fn find_by_id(&self, id: &WorkflowId) -> Result<Option<Workflow>, WorkflowError> {
        let row = sqlx::query_as::<_, WorkflowRow>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM workflows
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Workflow::from))
    }

    async fn list_all(&self) -> Result<Vec<Workflow>, WorkflowError> {
        let rows = sqlx::query_as::<_, WorkflowRow>(
            r#"
            SELECT id, name, description, is_active, created_at, updated_at
            FROM workflows
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Workflow::from).collect())
    }

    async fn update(&self, workflow: Workflow) -> Result<Workflow, WorkflowError> {
        let result = sqlx::query(
            r#"
            UPDATE workflows
            SET name = $2, description = $3, is_active = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(workflow.id.0)
        .bind(workflow.name.as_str())
        .bind(workflow.description.as_deref())
        .bind(workflow.is_active)
        .bind(workflow.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(WorkflowError::NotFound(workflow.id.to_string()));
        }

        Ok(workflow)
    }

    async fn delete(&self, id: &WorkflowId) -> Result<(), WorkflowError> {
        let result = sqlx::query("DELETE FROM workflows WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(WorkflowError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
