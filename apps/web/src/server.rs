use axum::{
    routing::{get, post},
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tracing_subscriber::EnvFilter;

use crate::api::handlers;
use crate::config::ServerConfig;
use crate::{shell::shell, state::AppState, App};

/// Demo research API only, without the page routes.
pub fn api_router() -> Router {
    Router::new()
        .route("/api/research/query", post(handlers::submit_query))
        .route("/api/research/history/:session_id", get(handlers::session_history))
        .route("/api/research/sessions", get(handlers::list_sessions))
        .route("/health", get(|| async { "OK" }))
}

pub fn router(app_state: AppState) -> Router {
    let leptos_options = app_state.leptos_options.clone();
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = app_state.clone();
                move || provide_context(state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .with_state(leptos_options);

    // API routes take priority over page routes
    api_router().merge(leptos_router)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let leptos_options = LeptosOptions::builder()
        .output_name("equity-research")
        .site_pkg_dir("pkg")
        .site_addr(config.addr)
        .build();

    let app = router(AppState::new(leptos_options));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
