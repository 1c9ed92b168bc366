use axum::response::Response;
use tracing::info;

use crate::core::error::AppError;
use crate::core::json::{JsonBody, json_response};
use crate::features::arithmetic::dto::{AddRequestDto, AddResponseDto};
use crate::features::arithmetic::service::add_operands;

pub async fn handle_add(JsonBody(request): JsonBody<AddRequestDto>) -> Result<Response, AppError> {
    info!(target: "arithmetic", "addition endpoint called");

    let total = add_operands(&request.a, &request.b)?;
    json_response(&AddResponseDto { total })
}
