use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::format::{self, ParseError};

/// The unique identifier associated with a NFC tag, in canonical form:
/// colon-separated uppercase hex, e.g. `04:9A:FF`.
///
/// Equal byte sequences always produce equal [`TagId`]s, so the value is
/// suitable as a lookup key or for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(String);

impl AsRef<str> for TagId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TagId {
    pub fn from_bytes(uid: &[u8]) -> Self {
        TagId(format::format_identifier(uid))
    }

    /// Recovers the identifier bytes from the canonical form.
    ///
    /// Only fails for values deserialized from an external source that do
    /// not hold canonical identifier strings.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ParseError> {
        format::parse_identifier(&self.0)
    }
}
