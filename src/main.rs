mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = config::Config::from_env();
    let state = state::AppState::from_config(&config);
    state
        .store
        .ensure_dir()
        .await
        .expect("images directory init failed");

    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        images_dir = %config.images_dir.display(),
        cors_origin = %config.cors_origin,
        "pinboard listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
