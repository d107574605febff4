//! Prompt and schema construction for hashtag generation.

use serde_json::{Value, json};

/// Name given to the schema in the structured-output directive.
pub const SCHEMA_NAME: &str = "HashtagList";

/// Prompt for schema-constrained generation.
///
/// The schema itself travels in the `format` field; the prompt only refers to it.
const STRUCTURED_TEMPLATE: &str = r#"You are a hashtag generator. Generate exactly {count} short, relevant and popular hashtags for the text below.

Mandatory rules:
- Return ONLY JSON that follows the provided schema exactly (no comments, no extra text).
- Hashtags must start with '#' and must not contain spaces (use CamelCase or underscores if needed).
- Do not repeat hashtags.
- Do not include explanations.

Input text (context):
{text}

Now produce the final JSON."#;

/// Prompt for plain JSON mode, where the shape is only described in text.
const PLAIN_TEMPLATE: &str = r##"Generate exactly {count} short, relevant and popular hashtags.

Rules:
- Start with '#'
- No spaces (use CamelCase or underscores)
- No duplicates
- Do not include any explanation

Return ONLY the following JSON (no extra text, no lines before or after):
{
"hashtags": ["#tag1", "#tag2"]
}

Input text:
{text}"##;

/// Both prompt variants and the schema for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSet {
    pub structured: String,
    pub plain: String,
    pub schema: Value,
}

impl PromptSet {
    /// Builds the prompts and schema for `count` hashtags about `text`.
    ///
    /// `text` is embedded verbatim. `count` is substituted before `text`, so a
    /// literal `{count}` inside the input survives untouched.
    pub fn build(text: &str, count: usize) -> Self {
        Self {
            structured: render(STRUCTURED_TEMPLATE, text, count),
            plain: render(PLAIN_TEMPLATE, text, count),
            schema: hashtag_schema(count),
        }
    }
}

fn render(template: &str, text: &str, count: usize) -> String {
    template
        .replace("{count}", &count.to_string())
        .replace("{text}", text)
}

/// JSON schema for `{"hashtags": [...]}` with exactly `count` string items.
pub fn hashtag_schema(count: usize) -> Value {
    json!({
        "type": "object",
        "properties": {
            "hashtags": {
                "type": "array",
                "minItems": count,
                "maxItems": count,
                "items": {"type": "string"}
            }
        },
        "required": ["hashtags"],
        "additionalProperties": false
    })
}
