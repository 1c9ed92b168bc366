use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use task_api_server::config::load_config;
use task_api_server::core::error::AppError;
use task_api_server::features::completion::{CompletionGateway, CompletionProvider, OpenAiClient};
use task_api_server::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;
    let openai_client = OpenAiClient::new(config.openai.clone(), config.disable_proxy)?;
    tracing::info!(model = openai_client.model(), "completion provider configured");

    let provider: Arc<dyn CompletionProvider> = Arc::new(openai_client);
    let app_state = AppState::new(Arc::new(CompletionGateway::new(provider)));
    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
