use serde::Deserialize;

use crate::error::HashtagError;

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

/// Number of hashtags generated when a request omits `count`.
pub const DEFAULT_COUNT: i64 = 10;

/// Largest accepted `count`.
pub const MAX_COUNT: i64 = 30;

/// Body of `POST /hashtags`.
///
/// Every field is optional on the wire; [`HashtagRequest::validate`] applies
/// defaults and bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HashtagRequest {
    pub text: Option<String>,
    pub count: Option<i64>,
    pub model: Option<String>,
}

/// A request whose fields have been trimmed, defaulted and bounds-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub text: String,
    pub count: usize,
    pub model: String,
}

impl HashtagRequest {
    /// Creates a request for `text` with no count or model override.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtag_api::models::HashtagRequest;
    ///
    /// let request = HashtagRequest::new("Sunset over the harbour").with_count(5);
    /// let validated = request.validate("llama3.2:3b").unwrap();
    /// assert_eq!(validated.count, 5);
    /// assert_eq!(validated.model, "llama3.2:3b");
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the requested number of hashtags.
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the model to generate with.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Trims and checks the request, filling in defaults.
    ///
    /// `text` must be non-blank, `count` defaults to 10 and must lie in `1..=30`,
    /// and a blank or missing `model` becomes `default_model`.
    ///
    /// # Errors
    ///
    /// Returns `HashtagError::Validation` naming the offending field.
    pub fn validate(&self, default_model: &str) -> Result<ValidatedRequest, HashtagError> {
        let text = self.text.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(HashtagError::Validation(
                "field 'text' is required and cannot be empty".to_string(),
            ));
        }

        let model = match self.model.as_deref().map(str::trim) {
            Some(model) if !model.is_empty() => model,
            _ => default_model,
        };

        let count = self.count.unwrap_or(DEFAULT_COUNT);
        if count <= 0 {
            return Err(HashtagError::Validation(
                "'count' must be greater than 0".to_string(),
            ));
        }
        if count > MAX_COUNT {
            return Err(HashtagError::Validation(format!(
                "'count' must be at most {MAX_COUNT}"
            )));
        }

        Ok(ValidatedRequest {
            text: text.to_string(),
            count: count as usize,
            model: model.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(request: HashtagRequest) -> String {
        match request.validate(DEFAULT_MODEL) {
            Err(HashtagError::Validation(message)) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_count_and_model() {
        let validated = HashtagRequest::new("  some text  ")
            .validate(DEFAULT_MODEL)
            .unwrap();

        assert_eq!(validated.text, "some text");
        assert_eq!(validated.count, 10);
        assert_eq!(validated.model, DEFAULT_MODEL);
    }

    #[test]
    fn trims_explicit_model() {
        let validated = HashtagRequest::new("text")
            .with_model("  qwen2.5:7b ")
            .validate(DEFAULT_MODEL)
            .unwrap();
        assert_eq!(validated.model, "qwen2.5:7b");
    }

    #[test]
    fn blank_model_falls_back_to_default() {
        let validated = HashtagRequest::new("text")
            .with_model("   ")
            .validate("custom:1b")
            .unwrap();
        assert_eq!(validated.model, "custom:1b");
    }

    #[test]
    fn rejects_missing_or_blank_text() {
        let message = validation_message(HashtagRequest::default());
        assert!(message.contains("'text'"));

        let message = validation_message(HashtagRequest::new(" \n\t "));
        assert!(message.contains("'text'"));
    }

    #[test]
    fn rejects_non_positive_count() {
        assert!(validation_message(HashtagRequest::new("t").with_count(0)).contains("greater than 0"));
        assert!(validation_message(HashtagRequest::new("t").with_count(-3)).contains("greater than 0"));
    }

    #[test]
    fn rejects_count_above_thirty() {
        let message = validation_message(HashtagRequest::new("t").with_count(31));
        assert!(message.contains("at most 30"));
    }

    #[test]
    fn accepts_count_bounds() {
        for count in [1, 30] {
            let validated = HashtagRequest::new("t")
                .with_count(count)
                .validate(DEFAULT_MODEL)
                .unwrap();
            assert_eq!(validated.count, count as usize);
        }
    }

    #[test]
    fn text_is_checked_before_count() {
        let message = validation_message(HashtagRequest::default().with_count(99));
        assert!(message.contains("'text'"));
    }

    #[test]
    fn deserializes_partial_body() {
        let request: HashtagRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(request, HashtagRequest::new("hello"));
    }
}
