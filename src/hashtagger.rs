//! Hashtag generation: prompt construction, model orchestration and post-processing.
//!
//! A request flows through three parts:
//!
//! 1. [`PromptSet`] renders a schema-guided prompt, a plain JSON-mode prompt and
//!    the JSON schema pinning the array length to the requested count.
//! 2. [`HashtagGenerator`] sends the structured request and, if Ollama rejects the
//!    schema, the plain one (see [`crate::ollama::generate_with_fallback`]).
//! 3. [`HashtagNormalizer`] turns the raw entries into `#Token` form and removes
//!    case-insensitive duplicates before the count contract is enforced.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use hashtag_api::hashtagger::HashtagGenerator;
//! use hashtag_api::models::HashtagRequest;
//! use hashtag_api::ollama::OllamaClientBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClientBuilder::new().build()?;
//! let generator = HashtagGenerator::new(Arc::new(client));
//!
//! let response = generator
//!     .generate(&HashtagRequest::new("Homemade sourdough with a crispy crust"))
//!     .await?;
//! assert_eq!(response.hashtags().len(), 10);
//! # Ok(())
//! # }
//! ```

mod generator;
mod normalizer;
mod prompt;

pub use generator::{HashtagGenerator, HashtagGeneratorBuilder};
pub use normalizer::HashtagNormalizer;
pub use prompt::{PromptSet, SCHEMA_NAME, hashtag_schema};
