mod config;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let (store, _writer) =
        match services::store::SubmissionStore::open(&config.submissions_file, config.store_queue_capacity).await {
            Ok(opened) => opened,
            Err(e) => {
                tracing::error!(error = %e, path = %config.submissions_file.display(), "store init failed");
                return ExitCode::FAILURE;
            }
        };
    let submissions_path = store.path().to_path_buf();
    let state = state::AppState::new(store);

    let app = routes::app(state, &config.website_dir);
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        %addr,
        submissions = %submissions_path.display(),
        website = %config.website_dir.display(),
        "AA Web Creations server listening"
    );
    for (method, path, about) in routes::ENDPOINTS {
        tracing::info!(method, path, about, "endpoint");
    }

    if let Err(e) = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
