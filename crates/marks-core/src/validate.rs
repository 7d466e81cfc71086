//! Address grammar checks and raw input splitting.
//!
//! The url grammar accepts dotted alphanumeric labels, an optional port of at
//! most four digits and an optional path drawn from a constrained character
//! set. The protocol must be exactly `http://` or `https://`.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::NewBookmark;
use crate::{Error, Result};

/// Protocol assumed when the raw input carries none.
pub const DEFAULT_PROTOCOL: &str = "https://";

#[allow(clippy::expect_used)]
static PROTOCOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://$").expect("protocol regex is valid"));

#[allow(clippy::expect_used)]
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(\.[A-Za-z0-9]+)*(:[0-9]{1,4})?(/[A-Za-z0-9_.%/?=&#-]*)?$")
        .expect("url regex is valid")
});

/// Check the protocol field.
pub fn validate_protocol(protocol: &str) -> Result<()> {
    if PROTOCOL_RE.is_match(protocol) {
        Ok(())
    } else {
        Err(Error::MalformedInput(format!(
            "protocol '{protocol}' must be http:// or https://"
        )))
    }
}

/// Check the url field (address without the scheme).
pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::MalformedInput("url is required".to_string()));
    }
    if URL_RE.is_match(url) {
        Ok(())
    } else {
        Err(Error::MalformedInput(format!(
            "url '{url}' is not a valid address"
        )))
    }
}

/// Check both fields of a candidate bookmark.
pub fn validate(draft: &NewBookmark) -> Result<()> {
    validate_protocol(&draft.protocol)?;
    validate_url(&draft.url)
}

/// Split raw user input into protocol and url.
///
/// A leading `http://` or `https://` becomes the protocol; anything else is
/// taken as the url under [`DEFAULT_PROTOCOL`]. No validation happens here.
///
/// ```rust
/// use marks_core::validate::split_address;
///
/// let draft = split_address("http://example.com/a");
/// assert_eq!(draft.protocol, "http://");
/// assert_eq!(draft.url, "example.com/a");
///
/// let draft = split_address("example.com");
/// assert_eq!(draft.protocol, "https://");
/// ```
#[must_use]
pub fn split_address(input: &str) -> NewBookmark {
    let input = input.trim();
    for protocol in ["https://", "http://"] {
        if let Some(rest) = input.strip_prefix(protocol) {
            return NewBookmark::new(protocol, rest);
        }
    }
    NewBookmark::new(DEFAULT_PROTOCOL, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_valid_urls() {
        let valid = [
            "example.com",
            "localhost",
            "sub.domain.example.org",
            "example.com:8080",
            "example.com/",
            "example.com/path/to/page",
            "example.com:443/search?q=rust&lang=en#top",
            "127.0.0.1:9000/x",
            "example.com/a_b-c.d%20e",
        ];
        for url in valid {
            assert!(validate_url(url).is_ok(), "expected '{url}' to be valid");
        }
    }

    #[test]
    fn test_rejects_invalid_urls() {
        let invalid = [
            "",
            "https://example.com",
            "example..com",
            ".example.com",
            "example.com.",
            "exa mple.com",
            "example.com:12345",
            "example.com:/path",
            "example.com/path with space",
            "example.com/<script>",
            "user@example.com",
        ];
        for url in invalid {
            assert!(
                matches!(validate_url(url), Err(Error::MalformedInput(_))),
                "expected '{url}' to be rejected"
            );
        }
    }

    #[test]
    fn test_protocol_grammar() {
        assert!(validate_protocol("http://").is_ok());
        assert!(validate_protocol("https://").is_ok());
        for bad in ["", "ftp://", "https:", "https:/", "HTTPS://", "https://x"] {
            assert!(validate_protocol(bad).is_err(), "expected '{bad}' to fail");
        }
    }

    #[test]
    fn test_split_address_trims_input() {
        let draft = split_address("  https://example.com/x  ");
        assert_eq!(draft, NewBookmark::new("https://", "example.com/x"));
    }

    #[test]
    fn test_split_address_without_scheme_keeps_everything_as_url() {
        let draft = split_address("ftp://example.com");
        assert_eq!(draft.protocol, DEFAULT_PROTOCOL);
        assert_eq!(draft.url, "ftp://example.com");
        assert!(validate(&draft).is_err());
    }

    proptest! {
        #[test]
        fn test_dotted_labels_are_accepted(
            labels in prop::collection::vec("[A-Za-z0-9]{1,10}", 1..5),
            port in prop::option::of(0u16..10000),
        ) {
            let mut url = labels.join(".");
            if let Some(port) = port {
                url.push_str(&format!(":{port}"));
            }
            prop_assert!(validate_url(&url).is_ok());
        }
    }
}
