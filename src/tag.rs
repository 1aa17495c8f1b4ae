use thiserror::Error;
use tracing::{debug, instrument};

use crate::uid::TagId;

/// A handle onto an NFC tag currently in range of the reader.
///
/// Implemented by a thin adapter over each platform's native tag object. The
/// handle is session-scoped and externally owned; this crate only borrows it
/// for the duration of a single read.
pub trait TagIdentifier {
    /// Returns the identifier bytes the hardware reports for this tag, in
    /// the order received.
    fn identifier(&self) -> Result<Vec<u8>, ExtractError>;
}

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The handle is expired or references a tag no longer in range.
    #[error("tag handle no longer references a tag in range")]
    InvalidHandle,

    /// The runtime reported a transport error while reading the identifier.
    #[error("reading the tag identifier failed")]
    ReadFailure(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reads the raw identifier bytes from a tag handle.
///
/// The byte order is exactly as the underlying runtime reports it; nothing is
/// reordered or truncated. An unusable handle surfaces as
/// [`ExtractError::InvalidHandle`] rather than an empty sequence, and
/// transport errors propagate unchanged without retrying.
#[instrument(skip(tag))]
pub fn extract_identifier<T: TagIdentifier + ?Sized>(tag: &T) -> Result<Vec<u8>, ExtractError> {
    let uid = tag.identifier()?;
    debug!(len = uid.len(), "Read tag identifier");
    Ok(uid)
}

/// Reads a tag's identifier and renders it in canonical form in one step.
pub fn read_tag_id<T: TagIdentifier + ?Sized>(tag: &T) -> Result<TagId, ExtractError> {
    Ok(TagId::from_bytes(&extract_identifier(tag)?))
}

/// An in-memory tag handle, used in tests and as a reference adapter.
#[derive(Debug, Clone)]
pub struct MemoryTag {
    uid: Option<Vec<u8>>,
}

impl MemoryTag {
    pub fn new(uid: impl Into<Vec<u8>>) -> Self {
        MemoryTag {
            uid: Some(uid.into()),
        }
    }

    /// A handle whose session has ended; every read fails with
    /// [`ExtractError::InvalidHandle`].
    pub fn expired() -> Self {
        MemoryTag { uid: None }
    }
}

impl TagIdentifier for MemoryTag {
    fn identifier(&self) -> Result<Vec<u8>, ExtractError> {
        match &self.uid {
            Some(uid) => Ok(uid.clone()),
            None => Err(ExtractError::InvalidHandle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct BrokenReader;

    impl TagIdentifier for BrokenReader {
        fn identifier(&self) -> Result<Vec<u8>, ExtractError> {
            Err(ExtractError::ReadFailure("tag connection lost".into()))
        }
    }

    #[test]
    fn extract_preserves_byte_order() {
        let tag = MemoryTag::new([0x04, 0x9A, 0xFF, 0x10, 0x32, 0x54, 0x76]);

        let uid = extract_identifier(&tag).unwrap();

        assert_eq!(uid, vec![0x04, 0x9A, 0xFF, 0x10, 0x32, 0x54, 0x76]);
    }

    #[test]
    fn expired_handle_is_an_error_not_empty_bytes() {
        let tag = MemoryTag::expired();

        let result = extract_identifier(&tag);

        assert!(matches!(result, Err(ExtractError::InvalidHandle)));
    }

    #[test]
    fn transport_errors_propagate_unchanged() {
        let result = extract_identifier(&BrokenReader);

        match result {
            Err(ExtractError::ReadFailure(source)) => {
                assert_eq!(source.to_string(), "tag connection lost");
            }
            other => panic!("expected ReadFailure, got {other:?}"),
        }
    }

    #[test]
    fn read_tag_id_extracts_and_formats() {
        let tag = MemoryTag::new([0x04, 0x9A, 0xFF]);

        let id = read_tag_id(&tag).unwrap();

        assert_eq!(id.as_ref(), "04:9A:FF");
    }

    #[test]
    fn trait_object_handles_are_usable() {
        let tag: Box<dyn TagIdentifier> = Box::new(MemoryTag::new([0xD4]));

        let id = read_tag_id(tag.as_ref()).unwrap();

        assert_eq!(id.as_ref(), "D4");
    }
}
