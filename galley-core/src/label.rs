//! Bounded names for devices and ships

use heapless::String;

use crate::error::ModelError;

/// Maximum name length in bytes
pub const MAX_NAME_LEN: usize = 32;

/// Fixed-capacity name
pub type Name = String<MAX_NAME_LEN>;

/// Build a [`Name`] from a string slice
///
/// Fails with [`ModelError::NameTooLong`] rather than truncating, so two
/// distinct long names can never collapse into the same one.
pub fn name(s: &str) -> Result<Name, ModelError> {
    Name::try_from(s).map_err(|_| ModelError::NameTooLong)
}
