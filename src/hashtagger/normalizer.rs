use std::collections::HashSet;

/// Post-processing layer for generated hashtags.
///
/// Models do not reliably follow formatting instructions, so every generated
/// entry is forced into `#Token` form here. Casing and punctuation are left as
/// the model produced them.
pub struct HashtagNormalizer;

impl HashtagNormalizer {
    /// Normalizes a single entry into a hashtag.
    ///
    /// # Normalization rules
    ///
    /// - Trims surrounding whitespace
    /// - Prepends `#` unless already present
    /// - Removes every space character (other whitespace is kept)
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtag_api::hashtagger::HashtagNormalizer;
    ///
    /// assert_eq!(HashtagNormalizer::normalize_tag("Tag One"), "#TagOne");
    /// assert_eq!(HashtagNormalizer::normalize_tag("  #rust  "), "#rust");
    /// assert_eq!(HashtagNormalizer::normalize_tag("C++"), "#C++");
    /// ```
    #[must_use]
    pub fn normalize_tag(tag: &str) -> String {
        let trimmed = tag.trim();
        let prefixed = if trimmed.starts_with('#') {
            trimmed.to_string()
        } else {
            format!("#{trimmed}")
        };
        prefixed.chars().filter(|c| *c != ' ').collect()
    }

    /// Normalizes a collection of entries, removing blanks and duplicates.
    ///
    /// # Normalization rules
    ///
    /// - Drops blank entries before normalizing
    /// - Applies `normalize_tag` to each remaining entry
    /// - Deduplicates case-insensitively, keeping the casing of the first occurrence
    /// - Preserves order of first occurrence
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtag_api::hashtagger::HashtagNormalizer;
    ///
    /// let tags = vec!["#Foo".to_string(), "#foo".to_string(), "FOO".to_string()];
    /// assert_eq!(HashtagNormalizer::normalize_tags(tags), vec!["#Foo"]);
    /// ```
    #[must_use]
    pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
        let mut seen = HashSet::new();
        tags.into_iter()
            .filter(|tag| !tag.trim().is_empty())
            .map(|tag| Self::normalize_tag(&tag))
            .filter(|tag| seen.insert(case_fold_key(tag)))
            .collect()
    }
}

/// Comparison key for case-insensitive deduplication.
///
/// Uppercases one character at a time and keeps any character whose uppercase
/// form expands to several (`ß` stays `ß`), so the Kelvin sign and `k` stay
/// distinct while `ä` and `Ä` compare equal.
fn case_fold_key(tag: &str) -> String {
    tag.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_hash_prefix_added_once() {
        assert_eq!(HashtagNormalizer::normalize_tag("rust"), "#rust");
        assert_eq!(HashtagNormalizer::normalize_tag("#rust"), "#rust");
        assert_eq!(HashtagNormalizer::normalize_tag("##rust"), "##rust");
    }

    #[test]
    fn test_spaces_removed_everywhere() {
        assert_eq!(HashtagNormalizer::normalize_tag("Tag One"), "#TagOne");
        assert_eq!(HashtagNormalizer::normalize_tag("# spaced out tag"), "#spacedouttag");
        assert_eq!(HashtagNormalizer::normalize_tag("  padded  "), "#padded");
    }

    #[test]
    fn test_other_whitespace_kept_inside() {
        assert_eq!(HashtagNormalizer::normalize_tag("a\tb"), "#a\tb");
    }

    #[test]
    fn test_case_and_punctuation_untouched() {
        assert_eq!(HashtagNormalizer::normalize_tag("MachineLearning!"), "#MachineLearning!");
        assert_eq!(HashtagNormalizer::normalize_tag("node.js"), "#node.js");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for raw in ["Tag One", "#tag2", "  spaced # inside ", "C++", "a\tb", "#"] {
            let once = HashtagNormalizer::normalize_tag(raw);
            assert_eq!(HashtagNormalizer::normalize_tag(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_deduplication_case_insensitive_keeps_first_casing() {
        let tags = strings(&["#Foo", "#foo", "#FOO"]);
        assert_eq!(HashtagNormalizer::normalize_tags(tags), vec!["#Foo"]);
    }

    #[test]
    fn test_deduplication_after_normalization() {
        let tags = strings(&["Tag One", "#tag2", "#tag2", "#TagOne", "tag one"]);
        assert_eq!(
            HashtagNormalizer::normalize_tags(tags),
            vec!["#TagOne", "#tag2"]
        );
    }

    #[test]
    fn test_deduplication_compares_uppercase_per_character() {
        let tags = strings(&["#Ärger", "#ärger", "#\u{212A}elvin", "#kelvin", "#Kelvin"]);
        assert_eq!(
            HashtagNormalizer::normalize_tags(tags),
            vec!["#Ärger", "#\u{212A}elvin", "#kelvin"]
        );

        let tags = strings(&["#straße", "#STRASSE", "#strasse"]);
        assert_eq!(
            HashtagNormalizer::normalize_tags(tags),
            vec!["#straße", "#STRASSE"]
        );
    }

    #[test]
    fn test_blank_entries_filtered() {
        let tags = strings(&["rust", "   ", "", "ai"]);
        assert_eq!(HashtagNormalizer::normalize_tags(tags), vec!["#rust", "#ai"]);
    }

    #[test]
    fn test_preserve_order_of_first_occurrence() {
        let tags = strings(&["Rust", "AI", "rust", "Web"]);
        assert_eq!(
            HashtagNormalizer::normalize_tags(tags),
            vec!["#Rust", "#AI", "#Web"]
        );
    }
}
