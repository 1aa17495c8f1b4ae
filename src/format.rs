use thiserror::Error;

/// Separator between the per-byte hex groups of a canonical identifier.
pub const DELIMITER: char = ':';

/// Errors produced when parsing a canonical identifier string back to bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A delimiter-separated group was not exactly two characters long.
    #[error("identifier group `{0}` is not two characters")]
    InvalidLength(String),

    /// A group contained something other than hex digits.
    #[error("identifier group `{0}` is not valid hexadecimal")]
    InvalidGroup(String),
}

/// Renders identifier bytes as colon-separated uppercase hex.
///
/// Each byte becomes exactly two hex digits (`0x0A` -> `"0A"`), joined with a
/// single `:`; no delimiter leads or trails. The empty sequence renders as
/// the empty string. Output is a pure function of the input bytes.
pub fn format_identifier(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// Parses a canonical identifier string back into its bytes.
///
/// Inverse of [`format_identifier`]; hex digits are accepted in either case.
/// The empty string parses to the empty byte sequence.
pub fn parse_identifier(s: &str) -> Result<Vec<u8>, ParseError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(DELIMITER)
        .map(|group| {
            if group.len() != 2 {
                return Err(ParseError::InvalidLength(group.to_string()));
            }
            // `from_str_radix` tolerates a leading sign, which is not hex
            if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ParseError::InvalidGroup(group.to_string()));
            }
            u8::from_str_radix(group, 16).map_err(|_| ParseError::InvalidGroup(group.to_string()))
        })
        .collect()
}
