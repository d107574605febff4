//! Hashtag generation for free text using an Ollama-hosted model.
//!
//! This module provides the `HashtagGenerator` struct, which validates a request,
//! runs the two-attempt generation, and enforces the exact-count contract on
//! the normalized result.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::error::HashtagError;
use crate::models::{DEFAULT_MODEL, HashtagRequest, HashtagResponse};
use crate::ollama::{Format, GenerateRequest, OllamaClientTrait, generate_with_fallback};

use super::normalizer::HashtagNormalizer;
use super::prompt::{PromptSet, SCHEMA_NAME};

/// Builder for constructing `HashtagGenerator` instances.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use hashtag_api::hashtagger::HashtagGeneratorBuilder;
/// use hashtag_api::models::HashtagRequest;
/// use hashtag_api::ollama::OllamaClientBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OllamaClientBuilder::new()
///     .base_url("http://localhost:11434")
///     .build()?;
///
/// let generator = HashtagGeneratorBuilder::new()
///     .client(Arc::new(client))
///     .default_model("llama3.2:3b")
///     .build();
///
/// let response = generator
///     .generate(&HashtagRequest::new("Sunrise run along the river").with_count(5))
///     .await?;
/// for hashtag in response.hashtags() {
///     println!("{hashtag}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct HashtagGeneratorBuilder {
    client: Option<Arc<dyn OllamaClientTrait>>,
    default_model: Option<String>,
}

impl HashtagGeneratorBuilder {
    /// Creates a new `HashtagGeneratorBuilder` with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Ollama client to use for generation.
    pub fn client(mut self, client: Arc<dyn OllamaClientTrait>) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the model used when a request does not name one.
    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    /// Builds the `HashtagGenerator`.
    ///
    /// # Panics
    ///
    /// Panics if `client()` was not called before `build()`.
    #[must_use]
    pub fn build(self) -> HashtagGenerator {
        HashtagGenerator {
            client: self.client.expect("client must be set via client() method"),
            default_model: self
                .default_model
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

/// Generates a fixed number of distinct hashtags for a piece of text.
pub struct HashtagGenerator {
    client: Arc<dyn OllamaClientTrait>,
    default_model: String,
}

impl HashtagGenerator {
    /// Creates a generator using [`DEFAULT_MODEL`] for requests without a model.
    ///
    /// Prefer using `HashtagGeneratorBuilder` to override the default model.
    #[must_use]
    pub fn new(client: Arc<dyn OllamaClientTrait>) -> Self {
        Self {
            client,
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Returns the model used when a request does not name one.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Generates exactly the requested number of hashtags for `request`.
    ///
    /// # Errors
    ///
    /// - `Validation` for blank text or a count outside `1..=30`
    /// - `Gateway` when both generation attempts fail or the first fails for a
    ///   reason other than schema rejection
    /// - `InvalidJson` / `SchemaMismatch` when the generated text is unusable
    /// - `InsufficientResults` when too few distinct hashtags survive normalization
    pub async fn generate(&self, request: &HashtagRequest) -> Result<HashtagResponse, HashtagError> {
        let request = request.validate(&self.default_model)?;
        let prompts = PromptSet::build(&request.text, request.count);

        let structured = GenerateRequest::new(
            &request.model,
            prompts.structured,
            Format::json_schema(SCHEMA_NAME, prompts.schema),
        );
        let plain = GenerateRequest::new(&request.model, prompts.plain, Format::Json);

        let generation = generate_with_fallback(self.client.as_ref(), &structured, &plain).await?;

        let raw = extract_hashtags(generation.response.text())?;
        let hashtags = select_hashtags(raw, request.count)?;

        info!(
            model = %request.model,
            count = request.count,
            attempt = %generation.attempt,
            "generated hashtags"
        );

        Ok(HashtagResponse::new(request.model, request.count, hashtags))
    }
}

/// Pulls the raw `hashtags` entries out of the generated JSON document.
///
/// Entries that are not strings become empty strings and are dropped later.
fn extract_hashtags(generated: &str) -> Result<Vec<String>, HashtagError> {
    let document: Value = serde_json::from_str(generated).map_err(HashtagError::InvalidJson)?;

    let Some(Value::Array(entries)) = document.as_object().and_then(|o| o.get("hashtags")) else {
        return Err(HashtagError::SchemaMismatch);
    };

    Ok(entries
        .iter()
        .map(|entry| entry.as_str().unwrap_or_default().to_string())
        .collect())
}

/// Normalizes, deduplicates and cuts the list to exactly `count` entries.
fn select_hashtags(raw: Vec<String>, count: usize) -> Result<Vec<String>, HashtagError> {
    let mut hashtags = HashtagNormalizer::normalize_tags(raw);

    if hashtags.len() < count {
        return Err(HashtagError::InsufficientResults {
            requested: count,
            produced: hashtags.len(),
        });
    }

    hashtags.truncate(count);
    Ok(hashtags)
}
