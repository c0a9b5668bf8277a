use thiserror::Error;

/// Error for WorkflowId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for WorkflowName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowNameError {
    #[error("Workflow name is required")]
    Empty,

    #[error("Workflow name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for workflow operations
#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    #[error("Invalid workflow ID: {0}")]
    InvalidWorkflowId(#[from] WorkflowIdError),

    #[error("Invalid workflow name: {0}")]
    InvalidName(#[from] WorkflowNameError),

    #[error("Workflow not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
