//! The result of a successful search step.

use serde::Serialize;

/// A phone number found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberMatch {
    /// National significant number, ASCII digits only.
    pub phone: String,
    /// Owning region; absent for non-geographic numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Extension digits, when one follows the number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    /// Character offset of the first matched character.
    pub starts_at: usize,
    /// Character offset just past the match, extension included.
    pub ends_at: usize,
}

impl PhoneNumberMatch {
    /// The matched span of `text`, the text the match was found in.
    ///
    /// Offsets past the end of `text` are clamped to it.
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        let start = byte_offset(text, self.starts_at);
        let rest = &text[start..];
        &rest[..byte_offset(rest, self.ends_at.saturating_sub(self.starts_at))]
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let found = PhoneNumberMatch {
            phone: "8005553535".to_string(),
            country: Some("RU".to_string()),
            ext: None,
            starts_at: 14,
            ends_at: 32,
        };
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"phone":"8005553535","country":"RU","startsAt":14,"endsAt":32}"#
        );
    }

    #[test]
    fn test_as_str() {
        let text = "call 2133734253 now";
        let found = PhoneNumberMatch {
            phone: "2133734253".to_string(),
            country: Some("US".to_string()),
            ext: None,
            starts_at: 5,
            ends_at: 15,
        };
        assert_eq!(found.as_str(text), "2133734253");
    }

    #[test]
    fn test_as_str_counts_characters() {
        let text = "тел. 2133734253, спасибо";
        let found = PhoneNumberMatch {
            phone: "2133734253".to_string(),
            country: Some("US".to_string()),
            ext: None,
            starts_at: 5,
            ends_at: 15,
        };
        assert_eq!(found.as_str(text), "2133734253");

        let past_end = PhoneNumberMatch {
            starts_at: 20,
            ends_at: 40,
            ..found
        };
        assert_eq!(past_end.as_str(text), "сибо");
    }
}
