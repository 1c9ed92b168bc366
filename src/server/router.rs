use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::arithmetic::handle_add;
use crate::features::completion::handle_open_api_completion;
use crate::features::frequency::handle_total;
use crate::server::AppState;

pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_healthcheck))
        .route(
            "/open_api_completion",
            post(handle_open_api_completion).fallback(handle_method_not_allowed),
        )
        .route("/add", post(handle_add).fallback(handle_method_not_allowed))
        .route("/total", post(handle_total).fallback(handle_method_not_allowed))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

pub async fn handle_healthcheck() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({ "status": "ok" })))
}

async fn handle_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.to_string())
}
