//! # imgvault
//!
//! Local image blob storage emulating a hosted media-upload service.
//!
//! imgvault persists chat-message images under a single managed directory
//! and hands back URL-style references, standing in for a hosted provider
//! in development and self-hosted deployments.
//!
//! ## Core Concepts
//!
//! - **Blobs**: image files stored flat under one managed root
//! - **Inline payloads**: `data:image/...;base64,...` strings decoded on ingest
//! - **Path references**: existing files copied byte-for-byte into the root
//! - **Logical ids**: caller-supplied or time-derived filename stems
//!
//! ## Example
//!
//! ```ignore
//! use imgvault::{BlobStore, StoreOptions};
//!
//! let store = BlobStore::new("uploads".into())?;
//! let blob = store.store("photo.png", &StoreOptions::default())?;
//! println!("{}", blob.url);
//! store.remove(blob.id.as_str())?;
//! ```

pub mod model;
pub mod store;

mod error;

pub use error::{Error, Result};
pub use model::{BlobId, RemoveReceipt, RemoveResult, ResourceKind, StoreOptions, StoredBlob};
pub use store::{BlobStore, MatchMode};

/// Public URL prefix under which stored blobs are served
pub const URL_PREFIX: &str = "/uploads";

/// Fallback file extension when none can be derived from the input
pub const DEFAULT_EXTENSION: &str = ".jpg";
