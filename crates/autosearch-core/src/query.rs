//! Query string parameter extraction.

use std::collections::HashMap;

use crate::error::ParamError;
use crate::pager::PageRequest;

/// Decoded query string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Parse a raw (still percent-encoded) query string.
    ///
    /// Pairs without an `=` are dropped. When a key repeats, the last value wins.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut params = HashMap::new();

        for pair in raw.unwrap_or_default().split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            params.insert(decode(key), decode(value));
        }

        Self { params }
    }

    /// Get a decoded parameter value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Get a parameter that must be present and non-empty.
    pub fn required(&self, name: &'static str) -> Result<&str, ParamError> {
        match self.get(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ParamError::Missing { name }),
        }
    }

    /// Parse an integer parameter, substituting `default` when the key is absent.
    pub fn int_or(&self, name: &'static str, default: &str) -> Result<i64, ParamError> {
        let raw = self.get(name).unwrap_or(default);
        raw.parse::<i64>().map_err(|_| ParamError::InvalidInteger {
            name,
            value: raw.to_string(),
        })
    }

    /// Extract `offset` (default `0`) and `limit` (default `10`).
    pub fn page_request(&self) -> Result<PageRequest, ParamError> {
        Ok(PageRequest::new(
            self.int_or("offset", "0")?,
            self.int_or("limit", "10")?,
        ))
    }
}

/// Form-style query decoding: `+` is a space, `%XX` is a byte.
///
/// Escapes that are not two hex digits stay as written; byte sequences that
/// are not UTF-8 decode to U+FFFD.
fn decode(input: &str) -> String {
    let spaced = input.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let q = QueryParams::parse(Some("variable=Region&offset=5&limit=2"));

        assert_eq!(q.params.len(), 3);
        assert_eq!(q.get("variable"), Some("Region"));
        assert_eq!(q.get("offset"), Some("5"));
        assert_eq!(q.get("limit"), Some("2"));
    }

    #[test]
    fn test_parse_none_and_empty() {
        assert!(QueryParams::parse(None).params.is_empty());
        assert!(QueryParams::parse(Some("")).params.is_empty());
    }

    #[test]
    fn test_pair_without_equals_is_dropped() {
        let q = QueryParams::parse(Some("flag&offset=1"));

        assert_eq!(q.params.len(), 1);
        assert_eq!(q.get("flag"), None);
        assert_eq!(q.get("offset"), Some("1"));
    }

    #[test]
    fn test_empty_value_is_kept() {
        let q = QueryParams::parse(Some("variable="));
        assert_eq!(q.get("variable"), Some(""));
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let q = QueryParams::parse(Some("variable=Tag%20Key&op=%3E%3D&name=a+b&k%26=v%3Dw"));

        assert_eq!(q.get("variable"), Some("Tag Key"));
        assert_eq!(q.get("op"), Some(">="));
        assert_eq!(q.get("name"), Some("a b"));
        assert_eq!(q.get("k&"), Some("v=w"));
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let q = QueryParams::parse(Some("expr=a=b"));
        assert_eq!(q.get("expr"), Some("a=b"));
    }

    #[test]
    fn test_invalid_utf8_escape_becomes_replacement_char() {
        let q = QueryParams::parse(Some("variable=caf%E9&other=%FF"));

        assert_eq!(q.get("variable"), Some("caf\u{FFFD}"));
        assert_eq!(q.get("other"), Some("\u{FFFD}"));
    }

    #[test]
    fn test_multibyte_escape_decodes() {
        let q = QueryParams::parse(Some("variable=caf%C3%A9"));
        assert_eq!(q.get("variable"), Some("café"));
    }

    #[test]
    fn test_malformed_escape_kept_as_written() {
        let q = QueryParams::parse(Some("x=a+%zz&y=100%"));

        assert_eq!(q.get("x"), Some("a %zz"));
        assert_eq!(q.get("y"), Some("100%"));
    }

    #[test]
    fn test_last_value_wins() {
        let q = QueryParams::parse(Some("limit=1&limit=7"));
        assert_eq!(q.get("limit"), Some("7"));
    }

    #[test]
    fn test_required() {
        let q = QueryParams::parse(Some("variable=&other=x"));

        assert_eq!(
            q.required("variable"),
            Err(ParamError::Missing { name: "variable" })
        );
        assert_eq!(
            q.required("absent"),
            Err(ParamError::Missing { name: "absent" })
        );
        assert_eq!(q.required("other"), Ok("x"));
    }

    #[test]
    fn test_page_request_defaults() {
        let q = QueryParams::parse(None);
        assert_eq!(q.page_request(), Ok(PageRequest::new(0, 10)));
    }

    #[test]
    fn test_page_request_negative_values() {
        let q = QueryParams::parse(Some("offset=-3&limit=-1"));
        assert_eq!(q.page_request(), Ok(PageRequest::new(-3, -1)));
    }

    #[test]
    fn test_page_request_invalid_integer() {
        let q = QueryParams::parse(Some("offset=abc"));
        let err = q.page_request().unwrap_err();

        assert_eq!(
            err,
            ParamError::InvalidInteger {
                name: "offset",
                value: "abc".to_string(),
            }
        );
        assert_eq!(err.to_string(), "offset param must be an integer");
    }

    #[test]
    fn test_out_of_range_integer_is_invalid() {
        let q = QueryParams::parse(Some("limit=99999999999999999999"));
        let err = q.page_request().unwrap_err();

        assert_eq!(
            err,
            ParamError::InvalidInteger {
                name: "limit",
                value: "99999999999999999999".to_string(),
            }
        );
        assert_eq!(err.to_string(), "limit param must be an integer");
    }

    #[test]
    fn test_empty_numeric_value_is_invalid() {
        let q = QueryParams::parse(Some("limit="));
        assert!(matches!(
            q.int_or("limit", "10"),
            Err(ParamError::InvalidInteger { name: "limit", .. })
        ));
    }
}
