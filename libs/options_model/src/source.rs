use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::Options;

/// The entry list a source reduces to.
pub type Entries = Vec<(String, Value)>;

/// A value that reduces to a key-unique, string-keyed mapping of option
/// values.
///
/// This is the capability [`Options::set_from`] and
/// [`Options::from_source`] accept. It covers the map types, owned pair
/// sequences, JSON objects, and references to other options objects (via
/// [`Options::to_map`]), so one options object can seed another.
pub trait OptionsSource {
    /// Reduces the source to its entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] if the value has no mapping shape
    /// and [`Error::DuplicateKey`] if it repeats a key. Sources that are
    /// key-unique by construction never fail.
    fn into_entries(self) -> Result<Entries>;
}

impl<K: Into<String>, V: Into<Value>, S> OptionsSource for HashMap<K, V, S> {
    fn into_entries(self) -> Result<Entries> {
        Ok(self
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect())
    }
}

impl<K: Into<String>, V: Into<Value>> OptionsSource for BTreeMap<K, V> {
    fn into_entries(self) -> Result<Entries> {
        Ok(self
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect())
    }
}

impl OptionsSource for Map<String, Value> {
    fn into_entries(self) -> Result<Entries> {
        Ok(self.into_iter().collect())
    }
}

/// Pair sequences keep their order but have to be checked for repeated
/// keys, unlike the inherently key-unique map sources.
impl<K: Into<String>, V: Into<Value>> OptionsSource for Vec<(K, V)> {
    fn into_entries(self) -> Result<Entries> {
        unique_entries(self)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> OptionsSource for [(K, V); N] {
    fn into_entries(self) -> Result<Entries> {
        unique_entries(self)
    }
}

/// A JSON value is a valid source only when it is an object; everything
/// else reports its kind in the error.
impl OptionsSource for Value {
    fn into_entries(self) -> Result<Entries> {
        match self {
            Value::Object(map) => map.into_entries(),
            other => Err(Error::invalid_source(value_kind(&other))),
        }
    }
}

impl<O: Options> OptionsSource for &O {
    fn into_entries(self) -> Result<Entries> {
        Ok(self.to_map()?.into_iter().collect())
    }
}

fn unique_entries<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Entries>
where
    K: Into<String>,
    V: Into<Value>,
{
    let pairs = pairs.into_iter();
    let mut entries = Entries::with_capacity(pairs.size_hint().0);

    for (key, value) in pairs {
        let key = key.into();
        if entries.iter().any(|(seen, _)| *seen == key) {
            return Err(Error::duplicate_key(key));
        }
        entries.push((key, value.into()));
    }

    Ok(entries)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}
