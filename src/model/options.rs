//! Options accepted by the store operation

use super::BlobId;

/// Options for [`BlobStore::store`](crate::BlobStore::store)
#[derive(Clone, Debug, Default)]
pub struct StoreOptions {
    /// Logical id to store under; derived from the clock when absent
    pub id: Option<BlobId>,
}

impl StoreOptions {
    /// Options carrying a caller-supplied id
    pub fn with_id(id: impl Into<BlobId>) -> Self {
        StoreOptions {
            id: Some(id.into()),
        }
    }
}
