//! Two-attempt generation: structured output first, plain JSON mode on schema rejection.

use std::fmt;

use thiserror::Error;
use tracing::warn;

use super::client::{OllamaClientTrait, OllamaError};
use super::types::{GenerateRequest, GenerateResponse};

/// Which of the two generate calls produced a result or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// The schema-constrained call.
    Structured,
    /// The unconstrained JSON-mode call made after a schema rejection.
    Fallback,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attempt::Structured => write!(f, "structured"),
            Attempt::Fallback => write!(f, "fallback"),
        }
    }
}

/// A gateway error tagged with the attempt that raised it.
#[derive(Debug, Error)]
#[error("{attempt} request failed: {source}")]
pub struct GatewayFailure {
    pub attempt: Attempt,
    #[source]
    pub source: OllamaError,
}

/// A successful generation and the attempt that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub response: GenerateResponse,
    pub attempt: Attempt,
}

/// Runs `structured`, falling back once to `plain` if Ollama rejects the schema.
///
/// Only a `500` whose body mentions an invalid JSON schema triggers the second
/// call. Every other failure, on either attempt, is returned as is.
///
/// # Errors
///
/// Returns `GatewayFailure` carrying the failing attempt and its `OllamaError`.
pub async fn generate_with_fallback(
    client: &dyn OllamaClientTrait,
    structured: &GenerateRequest,
    plain: &GenerateRequest,
) -> Result<Generation, GatewayFailure> {
    match client.generate(structured).await {
        Ok(response) => Ok(Generation {
            response,
            attempt: Attempt::Structured,
        }),
        Err(error) if error.is_schema_rejection() => {
            warn!(
                model = %plain.model,
                error = %error,
                "structured output rejected, retrying in JSON mode"
            );
            client
                .generate(plain)
                .await
                .map(|response| Generation {
                    response,
                    attempt: Attempt::Fallback,
                })
                .map_err(|source| GatewayFailure {
                    attempt: Attempt::Fallback,
                    source,
                })
        }
        Err(source) => Err(GatewayFailure {
            attempt: Attempt::Structured,
            source,
        }),
    }
}
