//! Keyed record store over the runtime's raw storage.
//!
//! Every record lives at a namespace-prefixed composite key of the form
//! `<namespace>:<encodedPart1>:<encodedPart2>...`. Parts are encoded
//! before joining, so a separator character inside a part can never
//! merge two parts, and the per-entity namespace keeps entity types
//! collision-free regardless of how many parts their keys carry.

use near_sdk::env;

pub const KEY_SEPARATOR: char = ':';

/// Percent-encodes the two characters that would make a composite key
/// ambiguous: `%` and the separator. Exact inverse of [`decode_key_part`].
pub fn encode_key_part(part: &str) -> String {
    part.replace('%', "%25").replace(KEY_SEPARATOR, "%3A")
}

pub fn decode_key_part(part: &str) -> String {
    part.replace("%3A", ":").replace("%25", "%")
}

/// Encodes identifying field values and joins them into a model key.
pub fn join_key_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| encode_key_part(part))
        .collect::<Vec<_>>()
        .join(&KEY_SEPARATOR.to_string())
}

/// A fully-qualified composite storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerKey(String);

impl LedgerKey {
    /// `model_key` is an already-encoded part string (see [`join_key_parts`]).
    pub fn new(namespace: &str, model_key: &str) -> Self {
        Self(format!("{namespace}{KEY_SEPARATOR}{model_key}"))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absent key is `None`, never an error.
pub fn read(key: &LedgerKey) -> Option<Vec<u8>> {
    env::storage_read(key.as_bytes())
}

pub fn write(key: &LedgerKey, value: &[u8]) {
    env::storage_write(key.as_bytes(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_part_encoding_round_trips_separator_and_escape() {
        for part in ["plain", "a:b", "a%b", "%3A", "a%253Ab", ":", ""] {
            assert_eq!(decode_key_part(&encode_key_part(part)), part);
        }
    }

    #[test]
    fn encoded_parts_never_contain_the_separator() {
        assert!(!encode_key_part("a:b:c").contains(KEY_SEPARATOR));
    }

    #[test]
    fn join_is_unambiguous_for_parts_containing_the_separator() {
        // One part "a:b" must not collide with two parts "a", "b".
        assert_ne!(join_key_parts(&["a:b"]), join_key_parts(&["a", "b"]));

        let decoded: Vec<String> = join_key_parts(&["a:b"])
            .split(KEY_SEPARATOR)
            .map(decode_key_part)
            .collect();
        assert_eq!(decoded, vec!["a:b"]);
    }

    #[test]
    fn ledger_key_is_namespace_prefixed() {
        let key = LedgerKey::new("regnet.users", &join_key_parts(&["Alice", "1111"]));
        assert_eq!(key.to_string(), "regnet.users:Alice:1111");
    }
}
