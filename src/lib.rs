pub mod config;
pub mod error;
pub mod hashtagger;
pub mod models;
pub mod ollama;
pub mod server;

pub use config::ServerConfig;
pub use error::HashtagError;
pub use hashtagger::{HashtagGenerator, HashtagGeneratorBuilder, HashtagNormalizer};
pub use models::{HashtagRequest, HashtagResponse};
pub use ollama::{OllamaClient, OllamaClientBuilder, OllamaClientTrait, OllamaError};
