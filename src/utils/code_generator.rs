//! Short code generation and parsing.
//!
//! Codes are random (v4) UUIDs, giving 122 bits of entropy. The canonical
//! textual form is the lowercase hyphenated rendering.

use crate::domain::MappingError;
use uuid::Uuid;

/// Generates a new random code.
pub fn generate_code() -> Uuid {
    Uuid::new_v4()
}

/// Parses a code string into its canonical identifier.
///
/// Accepts every form understood by [`Uuid::parse_str`] (hyphenated, simple,
/// braced and `urn:uuid:` prefixed), so `"{67e55044-...}"` and
/// `"67E5504410B1426F9247BB680E5FE0C8"` address the same mapping.
///
/// # Errors
///
/// Returns [`MappingError::InvalidCode`] if the string is not a UUID.
pub fn parse_code(code: &str) -> Result<Uuid, MappingError> {
    Uuid::parse_str(code).map_err(|e| MappingError::InvalidCode(format!("{code}: {e}")))
}
