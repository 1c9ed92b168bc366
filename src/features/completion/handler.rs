use axum::extract::State;
use axum::response::Response;
use tracing::info;

use crate::core::error::AppError;
use crate::core::json::{JsonBody, json_response};
use crate::features::completion::dto::{CompletionResponseDto, QuestionRequestDto};
use crate::server::AppState;

pub async fn handle_open_api_completion(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<QuestionRequestDto>,
) -> Result<Response, AppError> {
    info!(target: "completion", "completion endpoint called");

    let api_completion = state.completion.answer(&request.question).await;
    json_response(&CompletionResponseDto { api_completion })
}
