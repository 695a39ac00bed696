//! Logical blob identifier - the filename stem of a stored image

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Logical identifier for a stored blob (semantic ID, not a content hash)
///
/// Ids are either supplied by the caller or derived from the clock at store
/// time. Uniqueness holds by construction only; nothing checks for
/// collisions, and a colliding store silently overwrites.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobId(pub String);

impl BlobId {
    /// Create a blob ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        BlobId(id.into())
    }

    /// Derive a fresh ID from the current time
    ///
    /// The nanosecond reading keeps back-to-back derivations distinct; two
    /// calls within a single clock tick still collide and the later write
    /// wins.
    pub fn generate() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        BlobId(format!("image_{timestamp}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name for this ID with the given extension appended
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.0, extension)
    }
}

impl std::fmt::Display for BlobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BlobId {
    fn from(s: &str) -> Self {
        BlobId(s.to_string())
    }
}

impl From<String> for BlobId {
    fn from(s: String) -> Self {
        BlobId(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_time_prefixed() {
        let id = BlobId::generate();
        assert!(id.as_str().starts_with("image_"));
    }

    #[test]
    fn test_generate_yields_distinct_ids() {
        let a = BlobId::generate();
        let b = BlobId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_file_name_appends_extension() {
        let id = BlobId::new("avatar_42");
        assert_eq!(id.file_name(".png"), "avatar_42.png");
    }

    #[test]
    fn test_display_is_raw_id() {
        let id = BlobId::new("image_123");
        assert_eq!(id.to_string(), "image_123");
    }
}
