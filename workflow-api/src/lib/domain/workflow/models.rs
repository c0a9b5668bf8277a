use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::workflow::errors::WorkflowIdError;
use crate::domain::workflow::errors::WorkflowNameError;

/// Named automation resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Workflow {
    pub id: WorkflowId,
    pub name: WorkflowName,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    pub fn new(command: CreateWorkflowCommand, now: DateTime<Utc>) -> Self {
        Self {
            id: WorkflowId::new(),
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields, keeping identity and creation time.
    pub fn replace(&mut self, command: UpdateWorkflowCommand, now: DateTime<Utc>) {
        self.name = command.name;
        self.description = command.description;
        self.is_active = command.is_active;
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

/// Workflow unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkflowId(pub Uuid);

impl WorkflowId {
    /// Generate a new random workflow ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a workflow ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, WorkflowIdError> {
        Uuid::parse_str(s)
            .map(WorkflowId)
            .map_err(|e| WorkflowIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for WorkflowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Workflow name value object: non-blank, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowName(String);

impl WorkflowName {
    pub const MAX_LENGTH: usize = 200;

    pub fn new(name: String) -> Result<Self, WorkflowNameError> {
        let name = name.trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            Err(WorkflowNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(WorkflowNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub(crate) fn from_stored(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct CreateWorkflowCommand {
    pub name: WorkflowName,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Full replacement of a workflow's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateWorkflowCommand {
    pub name: WorkflowName,
    pub description: Option<String>,
    pub is_active: bool,
}
