//! API handlers for the quiz service.

use axum::{Json, body::Bytes, http::StatusCode};
use serde_json::Value;

use crate::quiz::QUESTIONS;
use crate::scoring::{AnswerRecord, ClassificationResult, classify, first_missing_field};
use crate::server::types::{ErrorResponse, HealthResponse, QuestionsResponse};

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "introspect",
    })
}

pub async fn questions_handler() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: QUESTIONS.to_vec(),
    })
}

/// Classify one quiz submission.
///
/// The body is parsed here rather than through the `Json` extractor: a body
/// that does not parse as JSON (or parses to the literal `null`) is an
/// unexpected fault surfaced as an opaque 500, while a parsed body missing a
/// field is a client fault reported as a 400 naming the first missing field.
pub async fn predict_handler(
    body: Bytes,
) -> Result<Json<ClassificationResult>, (StatusCode, Json<ErrorResponse>)> {
    let body = match serde_json::from_slice::<Value>(&body) {
        Ok(value) if !value.is_null() => value,
        Ok(_) => {
            tracing::error!("Prediction request body was JSON null");
            return Err(internal_error());
        }
        Err(e) => {
            tracing::error!("Failed to parse prediction request body: {}", e);
            return Err(internal_error());
        }
    };

    if let Some(field) = first_missing_field(&body) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Missing required field: {field}"),
            }),
        ));
    }

    let answers = AnswerRecord::from_value(&body);
    Ok(Json(classify(&answers)))
}

fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
}
