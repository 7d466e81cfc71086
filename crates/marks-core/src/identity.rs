//! Content-derived bookmark identity.
//!
//! Identifiers are name-based (version 3) UUIDs over the URL namespace and the
//! concatenated address `protocol + url`. Two bookmarks with the same address
//! always collide; the store relies on that to reject duplicates.

use uuid::Uuid;

use crate::types::BookmarkId;

/// Derive the identifier for `protocol + url`.
///
/// ```rust
/// use marks_core::identity::derive;
///
/// let a = derive("https://", "example.com");
/// let b = derive("https://", "example.com");
/// assert_eq!(a, b);
/// assert_ne!(a, derive("http://", "example.com"));
/// ```
#[must_use]
pub fn derive(protocol: &str, url: &str) -> BookmarkId {
    let name = format!("{protocol}{url}");
    BookmarkId::from_uuid(Uuid::new_v3(&Uuid::NAMESPACE_URL, name.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derived_ids_are_version_3() {
        let id = derive("https://", "example.com/path?q=1");
        assert_eq!(id.as_uuid().get_version_num(), 3);
    }

    #[test]
    fn test_identity_hashes_the_concatenated_address() {
        // Only the concatenation matters, not where the split falls
        assert_eq!(derive("https://", "example.com"), derive("https://example.com", ""));
    }

    #[test]
    fn test_identity_is_case_sensitive() {
        assert_ne!(derive("https://", "Example.com"), derive("https://", "example.com"));
    }

    proptest! {
        #[test]
        fn test_identity_is_deterministic(url in "[a-z0-9]{1,12}(\\.[a-z0-9]{1,8}){0,3}") {
            prop_assert_eq!(derive("https://", &url), derive("https://", &url));
        }

        #[test]
        fn test_protocol_changes_identity(url in "[a-z0-9]{1,12}(\\.[a-z0-9]{1,8}){0,3}") {
            prop_assert_ne!(derive("https://", &url), derive("http://", &url));
        }
    }
}
