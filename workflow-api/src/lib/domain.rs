pub mod auth;
pub mod user;
pub mod workflow;
