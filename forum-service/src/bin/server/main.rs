use std::sync::Arc;

use auth::Authenticator;
use forum_service::config::Config;
use forum_service::domain::post::service::PostService;
use forum_service::domain::topic::service::TopicService;
use forum_service::domain::user::service::UserService;
use forum_service::inbound::http::router::create_router;
use forum_service::outbound::repositories::PostgresPostRepository;
use forum_service::outbound::repositories::PostgresTopicRepository;
use forum_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forum_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "forum-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_minutes,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let topic_repository = Arc::new(PostgresTopicRepository::new(pg_pool.clone()));
    let post_repository = Arc::new(PostgresPostRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
    let topic_service = Arc::new(TopicService::new(
        Arc::clone(&topic_repository),
        Arc::clone(&post_repository),
    ));
    let post_service = Arc::new(PostService::new(post_repository, topic_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, topic_service, post_service, authenticator);

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
