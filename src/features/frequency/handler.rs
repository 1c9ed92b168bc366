use axum::response::Response;
use tracing::info;

use crate::core::error::AppError;
use crate::core::json::{JsonBody, json_response};
use crate::features::frequency::dto::{FrequencyRequestDto, FrequencyResponseDto};
use crate::features::frequency::service::count_characters;

pub async fn handle_total(
    JsonBody(request): JsonBody<FrequencyRequestDto>,
) -> Result<Response, AppError> {
    info!(target: "frequency", "frequency count endpoint called");

    let response = FrequencyResponseDto::from(count_characters(&request.string));
    json_response(&response)
}
