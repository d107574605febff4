//! Request-level errors and their HTTP representation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::ollama::GatewayFailure;

/// Everything that can make a hashtag request fail.
///
/// No variant carries partial results: a request either yields the full
/// requested count of distinct hashtags or one of these.
#[derive(Debug, Error)]
pub enum HashtagError {
    /// The request body is missing fields, malformed or out of bounds.
    #[error("{0}")]
    Validation(String),

    /// Ollama was unreachable, answered with an error, or returned an unusable envelope.
    #[error(transparent)]
    Gateway(#[from] GatewayFailure),

    /// The generated text is not a JSON document.
    #[error("generated content is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The generated JSON has no `hashtags` array.
    #[error("generated JSON does not follow the expected schema")]
    SchemaMismatch,

    /// Fewer distinct hashtags survived normalization than were requested.
    #[error(
        "the model could not generate the {requested} unique hashtags requested (generated {produced}); \
         try a more descriptive text or a different model"
    )]
    InsufficientResults { requested: usize, produced: usize },
}

impl HashtagError {
    /// HTTP status for this error.
    ///
    /// Every failure is reported as `400 Bad Request`, upstream ones included.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for HashtagError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ollama::{Attempt, OllamaError};

    #[test]
    fn insufficient_results_message_reports_both_counts() {
        let error = HashtagError::InsufficientResults {
            requested: 10,
            produced: 7,
        };
        let message = error.to_string();
        assert!(message.contains("10 unique hashtags requested"));
        assert!(message.contains("generated 7"));
    }

    #[test]
    fn gateway_error_message_is_transparent() {
        let error = HashtagError::from(GatewayFailure {
            attempt: Attempt::Structured,
            source: OllamaError::EmptyResponse,
        });
        assert_eq!(
            error.to_string(),
            "structured request failed: Ollama response contains no data"
        );
    }

    #[test]
    fn every_variant_maps_to_bad_request() {
        let errors = [
            HashtagError::Validation("x".into()),
            HashtagError::SchemaMismatch,
            HashtagError::InsufficientResults {
                requested: 2,
                produced: 1,
            },
            HashtagError::InvalidJson(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];
        for error in errors {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
