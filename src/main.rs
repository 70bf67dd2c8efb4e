mod config;
mod db;
mod model;
mod routes;
mod services;
mod state;
mod store;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let state = state::AppState::from_config(&config)
        .await
        .expect("animal store init failed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "zoo catalog listening");
    axum::serve(listener, app).await.expect("server failed");
}
