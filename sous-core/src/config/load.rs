//! Decoding of embedded configuration blobs

use crate::recipe::RecipeBook;

use super::DeviceConfig;

/// Errors that can occur while decoding an embedded blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Blob is empty
    Empty,
    /// Blob is not valid postcard data for the expected type
    Corrupt,
}

/// Decode a postcard-encoded [`DeviceConfig`]
pub fn decode_config(bytes: &[u8]) -> Result<DeviceConfig, LoadError> {
    decode(bytes)
}

/// Decode a postcard-encoded [`RecipeBook`]
pub fn decode_recipes(bytes: &[u8]) -> Result<RecipeBook, LoadError> {
    decode(bytes)
}

fn decode<'de, T: serde::Deserialize<'de>>(bytes: &'de [u8]) -> Result<T, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }
    postcard::from_bytes(bytes).map_err(|_| LoadError::Corrupt)
}
