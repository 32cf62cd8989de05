// Query string extraction module
// Percent-decoded lookup of query parameters

/// Decoded query parameters of one request
///
/// The first occurrence of a duplicated key wins. A key without `=` counts
/// as present with an empty value, so `?text` and `?text=` are equivalent.
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse the raw query string of a request URI (`None` when the URI has
    /// no `?` component)
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|raw| {
                form_urlencoded::parse(raw.as_bytes())
                    .map(|(key, value)| (key.into_owned(), value.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// Decoded value of the first occurrence of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let params = QueryParams::parse(Some("type=VOWELS&text=abc"));
        assert_eq!(params.get("type"), Some("VOWELS"));
        assert_eq!(params.get("text"), Some("abc"));
        assert_eq!(params.get("other"), None);
    }

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse(Some("text=Hello%20World"));
        assert_eq!(params.get("text"), Some("Hello World"));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let params = QueryParams::parse(Some("text=Hello+World"));
        assert_eq!(params.get("text"), Some("Hello World"));
    }

    #[test]
    fn test_key_without_equals_is_present_and_empty() {
        let params = QueryParams::parse(Some("type=VOWELS&text"));
        assert_eq!(params.get("text"), Some(""));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let params = QueryParams::parse(Some("type=VOWELS&type=CONSONANTS"));
        assert_eq!(params.get("type"), Some("VOWELS"));
    }

    #[test]
    fn test_absent_query_string() {
        let params = QueryParams::parse(None);
        assert_eq!(params.get("type"), None);
        assert_eq!(params.get("text"), None);
    }
}
