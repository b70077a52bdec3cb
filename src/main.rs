//! rssagg API server - main application entry point.
//!
//! Users sign up with a name and receive an API key. Protected endpoints
//! are wrapped in an authentication gate that resolves the key sent as
//! `Authorization: ApiKey <key>` to a user before the handler runs.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::{db::DbPool, middleware::auth::AuthGate, services::user_service::PgUserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default "info" level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let app = build_router(pool);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(pool: DbPool) -> Router {
    let gate = AuthGate::new(PgUserStore::new(pool.clone()));

    Router::new()
        .route("/v1/healthz", get(handlers::health::readiness))
        .route(
            "/v1/users",
            post(handlers::users::create_user).get(gate.wrap(handlers::users::get_user)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use tower::ServiceExt;

    fn lazy_pool() -> DbPool {
        sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://rssagg@127.0.0.1:1/rssagg")
            .unwrap()
    }

    #[tokio::test]
    async fn users_route_is_gated() {
        let app = build_router(lazy_pool());

        let response = app
            .oneshot(Request::get("/v1/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NETWORK_AUTHENTICATION_REQUIRED);
    }

    #[tokio::test]
    async fn wrong_scheme_is_rejected_before_lookup() {
        let app = build_router(lazy_pool());

        let response = app
            .oneshot(
                Request::get("/v1/users")
                    .header(AUTHORIZATION, "Bearer abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NETWORK_AUTHENTICATION_REQUIRED);
    }

    #[tokio::test]
    async fn signup_rejects_blank_name() {
        let app = build_router(lazy_pool());

        let response = app
            .oneshot(
                Request::post("/v1/users")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
