pub mod user;
pub mod workflow;

pub use user::PostgresUserRepository;
pub use workflow::PostgresWorkflowRepository;
