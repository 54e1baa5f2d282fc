use std::net::SocketAddr;

use axum::{Router, middleware, routing::get};
use jw_api::{
    config::ApiConfig,
    metrics,
    middleware::{cors, request_id, security_headers},
    state::ApiState,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    jw_api::tracing::init_tracing(&config.env);

    let metrics_handle = metrics::init_metrics()?;

    jw_db::ensure_database(&config.database_url).await?;
    let pool = jw_db::create_pool(&config.database_url, config.max_db_connections).await?;
    jw_db::run_migrations(&pool).await?;
    tracing::info!("Database ready");

    let state = ApiState::new(&config, pool);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Served outside the session gate
    let metrics_app = Router::new()
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(metrics_handle);

    let app = jw_api::router::router(state)
        .merge(metrics_app)
        .layer(cors::create_cors_layer(config.parsed_allowed_origins()))
        .layer(trace_layer)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    let app = security_headers::apply_security_headers(app, config.env.clone());

    let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;
    tracing::info!(addr = %config.server_addr, environment = ?config.env, "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
