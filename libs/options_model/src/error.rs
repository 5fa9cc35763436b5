//! Error handling types.

use crate::name;

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors to encounter on the dynamic options surface.
///
/// The undefined-accessor variants are subject to the strict-mode gate of the
/// type they are raised for; every other variant is an error in both modes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A write named an option that resolves no setter.
    #[error(r#"the option "{option}" does not have a callable "{method}" ("{probed}") setter method which must be defined"#)]
    UndefinedSetter {
        /// The raw external option name.
        option: String,
        /// The setter method name the option resolves to.
        method: String,
        /// The lowercase form of the probed method name.
        probed: String,
    },
    /// A read named an option that resolves no getter.
    #[error(r#"the option "{option}" does not have a callable "{method}" ("{probed}") getter method which must be defined"#)]
    UndefinedGetter {
        /// The raw external option name.
        option: String,
        /// The getter method name the option resolves to.
        method: String,
        /// The lowercase form of the probed method name.
        probed: String,
    },
    /// A deletion named an option that resolves no setter.
    #[error(r#"the option "{option}" cannot be unset as no setter method exists for it"#)]
    CannotUnset {
        /// The raw external option name.
        option: String,
    },
    /// A source value does not reduce to a key-unique mapping.
    #[error("invalid options source: expected a map, got {kind}")]
    InvalidSource {
        /// A short description of the actual value kind.
        kind: &'static str,
    },
    /// A source contained the same key more than once.
    #[error(r#"duplicate key "{key}" in options source"#)]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },
    /// A value could not be converted for its option's field.
    #[error(r#"invalid value for option "{option}": {source}"#)]
    InvalidValue {
        /// The canonical option name.
        option: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Constructs a new [`Error::UndefinedSetter`] variant from the raw
    /// external name.
    #[cold]
    pub fn undefined_setter(option: &str) -> Self {
        Self::UndefinedSetter {
            option: option.to_owned(),
            method: name::pretty_method("set", option),
            probed: name::probed_method("set", option),
        }
    }

    /// Constructs a new [`Error::UndefinedGetter`] variant from the raw
    /// external name.
    #[cold]
    pub fn undefined_getter(option: &str) -> Self {
        Self::UndefinedGetter {
            option: option.to_owned(),
            method: name::pretty_method("get", option),
            probed: name::probed_method("get", option),
        }
    }

    /// Constructs a new [`Error::CannotUnset`] variant.
    #[cold]
    pub fn cannot_unset(option: &str) -> Self {
        Self::CannotUnset {
            option: option.to_owned(),
        }
    }

    /// Constructs a new [`Error::InvalidSource`] variant.
    #[cold]
    pub fn invalid_source(kind: &'static str) -> Self {
        Self::InvalidSource { kind }
    }

    /// Constructs a new [`Error::DuplicateKey`] variant.
    #[cold]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// Constructs a new [`Error::InvalidValue`] variant.
    pub fn invalid_value(option: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidValue {
            option: option.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn setter_message_keeps_raw_and_probed_name() {
        let message = Error::undefined_setter("foo bar").to_string();
        assert_eq!(
            message,
            r#"the option "foo bar" does not have a callable "setFooBar" ("setfoo bar") setter method which must be defined"#
        );
    }

    #[test]
    fn setter_message_strips_underscores_from_probed_name() {
        let message = Error::undefined_setter("parent_private").to_string();
        assert_eq!(
            message,
            r#"the option "parent_private" does not have a callable "setParentPrivate" ("setparentprivate") setter method which must be defined"#
        );
    }

    #[test]
    fn getter_message_is_symmetric() {
        let message = Error::undefined_getter("field_foobar").to_string();
        assert_eq!(
            message,
            r#"the option "field_foobar" does not have a callable "getFieldFoobar" ("getfieldfoobar") getter method which must be defined"#
        );
    }
}
