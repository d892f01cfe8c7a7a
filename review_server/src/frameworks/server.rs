// Framework bootstrap for the review server runtime.

use crate::frameworks::config::{Settings, StorageBackend};
use crate::frameworks::db;
use crate::interface_adapters::crypto::BcryptPasswordHasher;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;
use crate::use_cases::prune_sessions::PruneSessionsUseCase;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use std::io::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, settings: Settings) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&settings).await?;
    if settings.session_ttl_seconds > 0 {
        tokio::spawn(prune_expired_sessions(
            state.clone(),
            Duration::from_secs(settings.session_prune_interval_seconds),
        ));
    }
    let app = build_router(state, &settings)?;

    tracing::info!(%address, backend = ?settings.storage_backend, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = Settings::load().map_err(|e| {
        tracing::error!(error = %e, "failed to load settings");
        Error::other(e)
    })?;
    let address = SocketAddr::new(settings.host, settings.port);

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, settings).await
}

// Periodically removes expired sessions from the store.
async fn prune_expired_sessions(state: AppState, every: Duration) {
    let use_case = PruneSessionsUseCase {
        clock: state.clock.clone(),
        store: state.sessions.clone(),
    };
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        match use_case.execute().await {
            Ok(0) => {}
            Ok(removed) => tracing::debug!(removed, "pruned expired sessions"),
            Err(e) => tracing::warn!(error = ?e, "failed to prune expired sessions"),
        }
    }
}

fn build_router(state: AppState, settings: &Settings) -> Result<Router> {
    let origin = HeaderValue::from_str(&settings.cors_origin).map_err(|e| {
        tracing::error!(origin = %settings.cors_origin, error = %e, "invalid cors origin");
        Error::other(format!("invalid cors origin: {e}"))
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(app(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

async fn build_state(settings: &Settings) -> Result<AppState> {
    let hasher = Arc::new(BcryptPasswordHasher::new(settings.password_hash_cost));

    match settings.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            Ok(AppState::in_memory(hasher, settings.session_ttl_seconds))
        }
        StorageBackend::Postgres => {
            let database_url = settings
                .database_url
                .as_deref()
                .ok_or_else(|| Error::other("DATABASE_URL must be set"))?;

            let pool = db::connect_pool(database_url, settings.database_max_connections)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "failed to connect to database");
                    Error::other(e)
                })?;

            db::run_migrations(&pool).await.map_err(|e| {
                tracing::error!(error = %e, "failed to run migrations");
                Error::other(e)
            })?;
            tracing::debug!(
                max_connections = settings.database_max_connections,
                "database ready"
            );

            Ok(AppState::postgres(pool, hasher, settings.session_ttl_seconds))
        }
    }
}
