/// Ollama HTTP client module.
///
/// This module provides an async HTTP client for the Ollama `/api/generate` endpoint,
/// the wire types it exchanges, and the schema-rejection fallback policy used when a
/// model refuses structured output.
mod client;
mod fallback;
mod types;

pub use client::{DEFAULT_BASE_URL, OllamaClient, OllamaClientBuilder, OllamaClientTrait, OllamaError};
pub use fallback::{Attempt, GatewayFailure, Generation, generate_with_fallback};
pub use types::{Format, GenerateRequest, GenerateResponse};
