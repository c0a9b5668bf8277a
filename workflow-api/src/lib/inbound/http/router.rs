use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_availability::check_email;
use super::handlers::check_availability::check_username;
use super::handlers::create_user::create_user;
use super::handlers::create_workflow::create_workflow;
use super::handlers::delete_user::delete_user;
use super::handlers::delete_workflow::delete_workflow;
use super::handlers::get_user::get_user;
use super::handlers::get_workflow::get_workflow;
use super::handlers::list_users::list_users;
use super::handlers::list_workflows::list_workflows;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::handlers::update_user::update_user;
use super::handlers::update_workflow::update_workflow;
use super::middleware::authenticate as auth_middleware;
use crate::auth::ports::AuthServicePort;
use crate::user::ports::UserServicePort;
use crate::workflow::ports::WorkflowServicePort;

/// Shared handler state. Services sit behind their ports so any
/// implementation can be mounted.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub workflow_service: Arc<dyn WorkflowServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    user_service: Arc<dyn UserServicePort>,
    workflow_service: Arc<dyn WorkflowServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        workflow_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/users/check-username/:username", get(check_username))
        .route("/api/users/check-email/:email", get(check_email))
        .route("/api/workflows", get(list_workflows).post(create_workflow))
        .route(
            "/api/workflows/:workflow_id",
            get(get_workflow)
                .put(update_workflow)
                .delete(delete_workflow),
        );

    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
