use serde::{Deserialize, Serialize};

/// Successful body of `POST /hashtags`.
///
/// `count` echoes the requested count; on success it always equals
/// `hashtags.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagResponse {
    model: String,
    count: usize,
    hashtags: Vec<String>,
}

impl HashtagResponse {
    pub fn new(model: impl Into<String>, count: usize, hashtags: Vec<String>) -> Self {
        Self {
            model: model.into(),
            count,
            hashtags,
        }
    }

    /// Returns the model that generated the hashtags.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the requested count.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the hashtags in generation order.
    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub ok: bool,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hashtag_response_serializes_wire_shape() {
        let response = HashtagResponse::new("llama3.2:3b", 2, vec!["#a".into(), "#b".into()]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"model": "llama3.2:3b", "count": 2, "hashtags": ["#a", "#b"]})
        );
    }

    #[test]
    fn error_response_has_only_message() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(value, json!({"message": "boom"}));
    }
}
