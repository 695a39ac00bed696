//! Inline image payloads (`data:` URLs)

use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Check whether an ingestion input is an inline payload rather than a path
///
/// Pure textual test mirroring the hosted API this store stands in for: the
/// string must carry both the image media marker and the base64 marker.
/// Anything else is treated as a file-path reference.
pub fn is_inline_payload(input: &str) -> bool {
    input.contains("data:image") && input.contains("base64")
}

/// A parsed `data:<media-type>;base64,<payload>` string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlinePayload {
    /// Declared media type (e.g. `image/png`)
    pub media_type: String,
    /// Decoded image bytes
    pub bytes: Vec<u8>,
}

impl InlinePayload {
    /// Parse and decode an inline payload
    ///
    /// The expected shape is `data:<media-type>;base64,<payload>` with the
    /// media type drawn from `[A-Za-z+/-]` and both halves non-empty.
    /// A shape mismatch or undecodable payload is [`Error::InvalidEncoding`];
    /// nothing is written on failure.
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input.strip_prefix("data:").ok_or_else(malformed)?;
        let (media_type, payload) = rest.split_once(";base64,").ok_or_else(malformed)?;

        if media_type.is_empty() || payload.is_empty() || !is_media_type(media_type) {
            return Err(malformed());
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidEncoding(format!("undecodable base64 payload: {e}")))?;

        Ok(InlinePayload {
            media_type: media_type.to_string(),
            bytes,
        })
    }
}

fn is_media_type(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphabetic() || matches!(b, b'+' | b'-' | b'/'))
}

fn malformed() -> Error {
    Error::InvalidEncoding("input does not match data:<media-type>;base64,<payload>".to_string())
}
