//! Extract the unique identifier from a detected NFC tag and render it in
//! canonical form.
//!
//! The crate is a thin adaptation layer between a platform NFC runtime and
//! application code that only wants a stable tag identity. A platform binding
//! implements [`TagIdentifier`] for its native tag handle; callers then use
//! [`read_tag_id`] (or [`extract_identifier`] plus [`format_identifier`]) to
//! turn a detected tag into a display- and storage-ready [`TagId`].
//!
//! Session lifecycle, NDEF parsing and tag writing are out of scope and
//! belong to the host NFC runtime.

pub mod format;
pub mod tag;
pub mod uid;

pub use format::{format_identifier, parse_identifier, ParseError};
pub use tag::{extract_identifier, read_tag_id, ExtractError, MemoryTag, TagIdentifier};
pub use uid::TagId;
