//! Stored blob descriptors returned to the caller

use super::BlobId;
use serde::{Deserialize, Serialize};

/// Kind of resource a stored blob represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
}

/// Descriptor for a persisted image
///
/// Serializes to the wire shape the chat backend consumes:
/// `{"url":"/uploads/<file>","id":"<id>","resourceKind":"image"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBlob {
    /// Public-facing reference path (`/uploads/<fileName>`)
    pub url: String,
    /// Logical identifier embedded as the filename stem
    pub id: BlobId,
    pub resource_kind: ResourceKind,
}

/// Status carried by a [`RemoveReceipt`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoveResult {
    Ok,
}

/// Acknowledgement returned by [`BlobStore::remove`](crate::BlobStore::remove)
///
/// Deletion is idempotent: "nothing to delete" produces the same receipt as
/// an actual unlink, so the serialized form is always `{"result":"ok"}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveReceipt {
    pub result: RemoveResult,
}

impl RemoveReceipt {
    pub fn ok() -> Self {
        RemoveReceipt {
            result: RemoveResult::Ok,
        }
    }
}
