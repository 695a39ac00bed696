//! Core data model types for imgvault

mod blob;
mod id;
mod options;

pub use blob::{RemoveReceipt, RemoveResult, ResourceKind, StoredBlob};
pub use id::BlobId;
pub use options::StoreOptions;
