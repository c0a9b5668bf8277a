use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use workflow_api::config::Config;
use workflow_api::domain::auth::service::AuthService;
use workflow_api::domain::user::service::UserService;
use workflow_api::domain::workflow::service::WorkflowService;
use workflow_api::inbound::http::router::create_router;
use workflow_api::outbound::repositories::PostgresUserRepository;
use workflow_api::outbound::repositories::PostgresWorkflowRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workflow_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "workflow-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        database_name = %config.database.name,
        http_port = config.server.http_port,
        jwt_issuer = %config.jwt.issuer,
        jwt_audience = %config.jwt.audience,
        jwt_expiration_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let connect_options = config
        .database
        .url
        .parse::<PgConnectOptions>()?
        .database(&config.database.name);

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&config.jwt.token_settings()));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let workflow_repository = Arc::new(PostgresWorkflowRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&authenticator),
    ));
    let user_service = Arc::new(UserService::new(user_repository));
    let workflow_service = Arc::new(WorkflowService::new(workflow_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application =
        create_router(auth_service, user_service, workflow_service, authenticator);

    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
