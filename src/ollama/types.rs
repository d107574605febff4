//! Request and response bodies for the Ollama generate endpoint.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Output format directive sent in the `format` field.
///
/// Ollama accepts either the bare string `"json"` or a structured-output object,
/// so this serializes to one of two different JSON shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Format {
    /// Free-form JSON mode; the prompt alone describes the shape.
    Json,
    /// Output constrained by a JSON schema.
    JsonSchema { name: String, schema: Value },
}

impl Format {
    /// Creates a schema-constrained format directive.
    pub fn json_schema(name: impl Into<String>, schema: Value) -> Self {
        Self::JsonSchema {
            name: name.into(),
            schema,
        }
    }
}

#[derive(Serialize)]
struct NamedSchema<'a> {
    name: &'a str,
    schema: &'a Value,
}

impl Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Format::Json => serializer.serialize_str("json"),
            Format::JsonSchema { name, schema } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "json_schema")?;
                map.serialize_entry("json_schema", &NamedSchema { name, schema })?;
                map.end()
            }
        }
    }
}

/// Body of a `POST /api/generate` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: Format,
}

impl GenerateRequest {
    /// Creates a non-streaming generate request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, format: Format) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            format,
        }
    }
}

/// Envelope returned by a non-streaming generate call.
///
/// With `format` set, `response` holds the generated JSON document as a string,
/// which callers parse a second time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl GenerateResponse {
    /// Returns the generated text, or an empty string when absent.
    pub fn text(&self) -> &str {
        self.response.as_deref().unwrap_or_default()
    }
}
