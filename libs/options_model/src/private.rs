//! Internal details for use by the proc-macro expansion.

use serde::Serialize;
use serde::de::DeserializeOwned;
pub use {serde, serde_json};

use crate::error::{Error, Result};

/// Converts an incoming dynamic value into a concrete field type.
///
/// Backs the setter thunks the derive emits. `null` deserializes into
/// [`None`] for [`Option`] fields, which is what gives the default
/// accessors their null-clears behavior.
///
/// # Errors
///
/// Fails with [`Error::InvalidValue`] naming `option` if the value does not
/// deserialize into `T`.
pub fn from_value<T: DeserializeOwned>(option: &'static str, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| Error::invalid_value(option, source))
}

/// Converts a field back into a dynamic value.
///
/// Backs the getter thunks the derive emits.
///
/// # Errors
///
/// Fails with [`Error::InvalidValue`] naming `option` if the field does not
/// serialize.
pub fn to_value<T: Serialize>(option: &'static str, field: &T) -> Result<serde_json::Value> {
    serde_json::to_value(field).map_err(|source| Error::invalid_value(option, source))
}
