#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenIssuer;
use auth::TokenSettings;
use chrono::DateTime;
use chrono::Utc;
use serde_json::json;
use serde_json::Value;
use tokio::sync::RwLock;
use workflow_api::domain::auth::service::AuthService;
use workflow_api::domain::user::service::UserService;
use workflow_api::domain::workflow::service::WorkflowService;
use workflow_api::inbound::http::router::create_router;
use workflow_api::user::errors::UserError;
use workflow_api::user::models::User;
use workflow_api::user::models::UserId;
use workflow_api::user::ports::UserRepository;
use workflow_api::workflow::errors::WorkflowError;
use workflow_api::workflow::models::Workflow;
use workflow_api::workflow::models::WorkflowId;
use workflow_api::workflow::ports::WorkflowRepository;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_ISSUER: &str = "workflow-api";
pub const TEST_AUDIENCE: &str = "workflow-api-clients";

pub fn token_settings() -> TokenSettings {
    TokenSettings::new(TEST_SECRET.to_vec(), TEST_ISSUER, TEST_AUDIENCE, 60)
}

/// Test application that spawns a real server over in-memory repositories
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUserRepository::default());
        let workflows = Arc::new(InMemoryWorkflowRepository::default());
        let authenticator = Arc::new(Authenticator::new(&token_settings()));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&users)));
        let workflow_service = Arc::new(WorkflowService::new(workflows));

        let router = create_router(auth_service, user_service, workflow_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(&token_settings()),
            users,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password,
                "confirmPassword": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create a user through the API and return its JSON representation.
    pub async fn create_user(&self, username: &str, email: &str) -> Value {
        let response = self
            .post("/api/users")
            .json(&json!({
                "username": username,
                "email": email,
                "password": "password123",
                "fullName": "Test User"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }

    pub async fn create_workflow(&self, name: &str) -> Value {
        let response = self
            .post("/api/workflows")
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }
}

/// User repository kept in memory, enforcing unique usernames and emails.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    fn check_unique(users: &HashMap<UserId, User>, user: &User) -> Result<(), UserError> {
        for other in users.values().filter(|other| other.id != user.id) {
            if other.username == user.username {
                return Err(UserError::UsernameAlreadyExists(
                    user.username.as_str().to_string(),
                ));
            }
            if other.email == user.email {
                return Err(UserError::EmailAlreadyExists(
                    user.email.as_str().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Stored state of a user, bypassing the API.
    pub async fn stored(&self, email: &str) -> Option<User> {
        self.find_by_email(email).await.ok().flatten()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        Self::check_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn record_login(&self, id: &UserId, at: DateTime<Utc>) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .get_mut(id)
            .map(|user| user.record_login(at))
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn username_exists(&self, username: &str) -> Result<bool, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|user| user.username.as_str() == username))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}

#[derive(Default)]
pub struct InMemoryWorkflowRepository {
    workflows: RwLock<HashMap<WorkflowId, Workflow>>,
}

#[async_trait]
impl WorkflowRepository for InMemoryWorkflowRepository {
    async fn create(&self, workflow: Workflow) -> Result<Workflow, WorkflowError> {
        self.workflows
            .write()
            .await
            .insert(workflow.id, workflow.clone());
        Ok(workflow)
    }

    async fn find_by_id(&self, id: &WorkflowId) -> Result<Option<Workflow>, WorkflowError> {
        Ok(self.workflows.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Workflow>, WorkflowError> {
        let mut workflows: Vec<Workflow> =
            self.workflows.read().await.values().cloned().collect();
        workflows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workflows)
    }

    async fn update(&self, workflow: Workflow) -> Result<Workflow, WorkflowError> {
        let mut workflows = self.workflows.write().await;
        if !workflows.contains_key(&workflow.id) {
            return Err(WorkflowError::NotFound(workflow.id.to_string()));
        }
        workflows.insert(workflow.id, workflow.clone());
        Ok(workflow)
    }

    async fn delete(&self, id: &WorkflowId) -> Result<(), WorkflowError> {
        self.workflows
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))
    }
}
