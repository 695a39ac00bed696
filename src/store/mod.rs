//! Managed upload directory storage
//!
//! This module implements the blob-storage layer: input classification,
//! inline payload decoding, and the flat managed root holding every stored
//! image file.

mod blob_store;
mod payload;

pub use blob_store::{BlobStore, MatchMode};
pub use payload::{is_inline_payload, InlinePayload};
