use std::fmt;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::name;
use crate::source::OptionsSource;

/// Setter thunk stored in an accessor table entry.
pub type SetFn<T> = fn(&mut T, Value) -> Result<()>;

/// Getter thunk stored in an accessor table entry.
pub type GetFn<T> = fn(&T) -> Result<Value>;

/// Projection from an options object to an embedded member.
pub type AsDynFn<T> = fn(&T) -> &dyn DynOptions;

/// Mutable projection from an options object to an embedded member.
pub type AsDynMutFn<T> = fn(&mut T) -> &mut dyn DynOptions;

/// Derivable trait for typed options objects with validated dynamic access.
///
/// A concrete options type is a plain struct deriving this trait. Its fields
/// are addressed externally by name, where `snake_case`, `camelCase`, and
/// space-separated spellings are equivalent, through [`set`](Self::set),
/// [`get`](Self::get), [`contains`](Self::contains), and
/// [`unset`](Self::unset), or in bulk through [`set_from`](Self::set_from)
/// and [`from_source`](Self::from_source).
///
/// ```
/// use options_model::Options;
/// use serde_json::json;
///
/// #[derive(Debug, Default, Options)]
/// struct ServerOptions {
///     host: String,
///     port: Option<u16>,
/// }
///
/// let mut options = ServerOptions::from_source(json!({
///     "host": "localhost",
///     "port": 8080,
/// }))?;
///
/// assert_eq!(options.host, "localhost");
/// assert_eq!(options.port, Some(8080));
///
/// // a camelCase alias resolves the same field
/// options.set("Host", "example.org")?;
/// assert_eq!(options.get("host")?, json!("example.org"));
/// # Ok::<_, options_model::Error>(())
/// ```
///
/// Dispatch is driven by [`ACCESSORS`](Self::ACCESSORS), a table the derive
/// builds at declaration time, so no reflection happens at runtime. Values
/// cross the dynamic surface as [`serde_json::Value`] and convert to and
/// from the concrete field types through serde: writing `null` to an
/// [`Option`] field clears it, while a plain field rejects `null` the same
/// way it rejects any other ill-typed value.
///
/// Writes and reads of names that resolve no accessor fail by default; a
/// type declared with `#[option(strict = false)]` drops such writes and
/// yields `null` for such reads instead. See [`STRICT`](Self::STRICT) for
/// the exact scope of the gate.
pub trait Options: Sized + 'static {
    /// The accessor table, sorted by lookup key.
    const ACCESSORS: &'static [FieldAccessor<Self>];

    /// Projections to embedded members whose options also resolve through
    /// this object, in declaration order.
    ///
    /// Resolution consults [`ACCESSORS`](Self::ACCESSORS) first, then each
    /// member in turn, so entries of the outer type shadow embedded ones.
    const FLATTENED: &'static [Flattened<Self>] = &[];

    /// Whether reads and writes of unknown options are errors.
    ///
    /// With strict mode off, an unknown write becomes a no-op and an
    /// unknown read yields [`Value::Null`]. The gate covers nothing else:
    /// [`unset`](Self::unset) of an unknown option and value conversion
    /// failures are errors in both modes. For flattened members, the
    /// outermost type's flag governs the whole resolution walk.
    const STRICT: bool = true;

    /// Writes a single option through its resolved setter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedSetter`] if no setter resolves and
    /// [`STRICT`](Self::STRICT) is set; without strict mode the write is
    /// dropped. A resolved setter may fail with [`Error::InvalidValue`]
    /// regardless of mode.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        match self.try_set(name, value.into()) {
            TrySet::Done => Ok(()),
            TrySet::Failed(error) => Err(error),
            TrySet::NotFound(_) if Self::STRICT => Err(Error::undefined_setter(name)),
            TrySet::NotFound(_) => {
                log::trace!("dropping write to unknown option `{name}`");
                Ok(())
            },
        }
    }

    /// Reads a single option through its resolved getter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedGetter`] if no getter resolves and
    /// [`STRICT`](Self::STRICT) is set; without strict mode the read yields
    /// [`Value::Null`]. A resolved getter may fail regardless of mode.
    fn get(&self, name: &str) -> Result<Value> {
        match self.try_get(name) {
            Some(result) => result,
            None if Self::STRICT => Err(Error::undefined_getter(name)),
            None => {
                log::trace!("yielding null for unknown option `{name}`");
                Ok(Value::Null)
            },
        }
    }

    /// Returns whether the option currently holds a value.
    ///
    /// This never fails, regardless of strict mode. It is `false` when no
    /// getter resolves, even if the field itself holds data, and `true`
    /// exactly when the resolved getter yields a non-null value: `0`,
    /// `""`, and `false` are present, `null` is absent. A failing getter
    /// reports `false`.
    #[must_use]
    fn contains(&self, name: &str) -> bool {
        matches!(self.try_get(name), Some(Ok(value)) if !value.is_null())
    }

    /// Clears the option by writing `null` through its resolved setter.
    ///
    /// The setter decides what `null` means for its field; the default
    /// accessors clear [`Option`] fields and reject `null` anywhere else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotUnset`] if no setter resolves, in strict and
    /// non-strict mode alike. A resolved setter may fail with
    /// [`Error::InvalidValue`].
    fn unset(&mut self, name: &str) -> Result<()> {
        match self.try_set(name, Value::Null) {
            TrySet::Done => Ok(()),
            TrySet::Failed(error) => Err(error),
            TrySet::NotFound(_) => Err(Error::cannot_unset(name)),
        }
    }

    /// Applies every entry of `source` through the single-option write
    /// path, in the source's iteration order.
    ///
    /// Returns `self` to allow chaining.
    ///
    /// # Errors
    ///
    /// Fails if the source does not reduce to a key-unique mapping, before
    /// any entry is applied. A failing write stops the iteration; entries
    /// already applied remain in place.
    fn set_from(&mut self, source: impl OptionsSource) -> Result<&mut Self> {
        for (name, value) in source.into_entries()? {
            self.set(&name, value)?;
        }
        Ok(self)
    }

    /// Creates a new instance from the type's defaults and applies `source`
    /// on top via [`set_from`](Self::set_from).
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`set_from`](Self::set_from).
    fn from_source(source: impl OptionsSource) -> Result<Self>
    where
        Self: Default,
    {
        let mut options = Self::default();
        options.set_from(source)?;
        Ok(options)
    }

    /// Reduces the object to a mapping of canonical option names to their
    /// current values.
    ///
    /// Only options with a getter appear; null values are kept. Flattened
    /// members are merged with outer entries shadowing embedded ones. The
    /// result is accepted anywhere an [`OptionsSource`] is, which is what
    /// allows seeding one options object from another.
    ///
    /// # Errors
    ///
    /// Fails if any resolved getter fails.
    fn to_map(&self) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        self.collect_entries(&mut map)?;
        Ok(map)
    }
}

/// Object-safe dispatch core shared by every [`Options`] type.
///
/// A blanket implementation covers all `Options` types. [`Flattened`]
/// entries store projections to this trait, which is what lets embedded
/// members of differing types take part in a single resolution walk.
///
/// The methods only resolve accessors and never apply the strict-mode gate;
/// the outermost [`Options`] call is responsible for gating and error
/// construction.
pub trait DynOptions {
    /// Tries to write the option `name` resolves to within this subtree.
    fn try_set(&mut self, name: &str, value: Value) -> TrySet;

    /// Tries to read the option `name` resolves to within this subtree.
    ///
    /// Returns [`None`] when no getter resolves.
    fn try_get(&self, name: &str) -> Option<Result<Value>>;

    /// Collects the readable options of this subtree into `out`, skipping
    /// names that are already present.
    ///
    /// # Errors
    ///
    /// Fails if a resolved getter fails.
    fn collect_entries(&self, out: &mut Map<String, Value>) -> Result<()>;
}

impl<T: Options> DynOptions for T {
    fn try_set(&mut self, name: &str, mut value: Value) -> TrySet {
        if let Some(set) = find::<T>(name).and_then(|entry| entry.set) {
            return match set(self, value) {
                Ok(()) => TrySet::Done,
                Err(error) => TrySet::Failed(error),
            };
        }

        for member in T::FLATTENED {
            match (member.as_dyn_mut)(self).try_set(name, value) {
                TrySet::NotFound(returned) => value = returned,
                outcome => return outcome,
            }
        }

        TrySet::NotFound(value)
    }

    fn try_get(&self, name: &str) -> Option<Result<Value>> {
        if let Some(get) = find::<T>(name).and_then(|entry| entry.get) {
            return Some(get(self));
        }

        T::FLATTENED
            .iter()
            .find_map(|member| (member.as_dyn)(self).try_get(name))
    }

    fn collect_entries(&self, out: &mut Map<String, Value>) -> Result<()> {
        for entry in T::ACCESSORS {
            let Some(get) = entry.get else {
                continue;
            };

            if !out.contains_key(entry.name) {
                out.insert(entry.name.to_owned(), get(self)?);
            }
        }

        for member in T::FLATTENED {
            (member.as_dyn)(self).collect_entries(out)?;
        }

        Ok(())
    }
}

/// Looks up the accessor entry `name` resolves to.
fn find<T: Options>(name: &str) -> Option<&'static FieldAccessor<T>> {
    match T::ACCESSORS.binary_search_by(|entry| name::cmp_key(entry.key, name)) {
        Ok(index) => T::ACCESSORS.get(index),
        Err(_) => None,
    }
}

/// Outcome of a setter resolution walk over one subtree.
#[derive(Debug)]
pub enum TrySet {
    /// A setter resolved and accepted the value.
    Done,
    /// A setter resolved but rejected the value.
    Failed(Error),
    /// No setter resolved; the value is handed back for the next candidate.
    NotFound(Value),
}

/// A single entry in a type's accessor table.
///
/// An entry carries the canonical option name, the normalized lookup key it
/// is found under, and the accessor thunks dispatch invokes. Construction is
/// const so tables can live in `'static` data; the
/// [`Options`](derive@crate::Options) derive emits them sorted by key.
pub struct FieldAccessor<T> {
    name: &'static str,
    key: &'static str,
    set: Option<SetFn<T>>,
    get: Option<GetFn<T>>,
}

impl<T> FieldAccessor<T> {
    /// Creates an entry with no accessors.
    ///
    /// `key` must be the normalized form of `name` and entries must be
    /// sorted by it within the table; lookups misbehave otherwise.
    #[must_use]
    pub const fn new(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            set: None,
            get: None,
        }
    }

    /// Attaches the setter thunk.
    #[must_use]
    pub const fn with_set(mut self, set: SetFn<T>) -> Self {
        self.set = Some(set);
        self
    }

    /// Attaches the getter thunk.
    #[must_use]
    pub const fn with_get(mut self, get: GetFn<T>) -> Self {
        self.get = Some(get);
        self
    }

    /// The canonical option name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The normalized lookup key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

// manual Debug: a derive would pointlessly bound T, and fn pointer
// addresses carry no information worth printing.
impl<T> fmt::Debug for FieldAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("set", &self.set.is_some())
            .field("get", &self.get.is_some())
            .finish()
    }
}

/// Projection entry for an embedded member whose options resolve through
/// the outer object.
pub struct Flattened<T> {
    as_dyn: AsDynFn<T>,
    as_dyn_mut: AsDynMutFn<T>,
}

impl<T> Flattened<T> {
    /// Creates an entry from the member projections.
    #[must_use]
    pub const fn new(as_dyn: AsDynFn<T>, as_dyn_mut: AsDynMutFn<T>) -> Self {
        Self { as_dyn, as_dyn_mut }
    }
}

impl<T> fmt::Debug for Flattened<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flattened").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{FieldAccessor, Flattened, Options};
    use crate::error::Error;
    use crate::private;

    #[derive(Debug, Default)]
    struct Base {
        label: Option<String>,
        hidden: u32,
    }

    impl Options for Base {
        const ACCESSORS: &'static [FieldAccessor<Self>] = &[
            FieldAccessor::new("hidden", "hidden").with_set(|this, value| {
                this.hidden = private::from_value("hidden", value)?;
                Ok(())
            }),
            FieldAccessor::new("label", "label")
                .with_set(|this: &mut Self, value| {
                    this.label = private::from_value("label", value)?;
                    Ok(())
                })
                .with_get(|this| private::to_value("label", &this.label)),
        ];
    }

    #[derive(Debug, Default)]
    struct Derived {
        base: Base,
        label: Option<String>,
        count: u32,
    }

    impl Options for Derived {
        const ACCESSORS: &'static [FieldAccessor<Self>] = &[
            FieldAccessor::new("count", "count")
                .with_set(|this: &mut Self, value| {
                    this.count = private::from_value("count", value)?;
                    Ok(())
                })
                .with_get(|this| private::to_value("count", &this.count)),
            FieldAccessor::new("label", "label")
                .with_set(|this: &mut Self, value| {
                    this.label = private::from_value("label", value)?;
                    Ok(())
                })
                .with_get(|this| private::to_value("label", &this.label)),
        ];

        const FLATTENED: &'static [Flattened<Self>] =
            &[Flattened::new(|this| &this.base, |this| &mut this.base)];
    }

    #[derive(Debug, Default)]
    struct Lax {
        count: u32,
    }

    impl Options for Lax {
        const ACCESSORS: &'static [FieldAccessor<Self>] = &[
            FieldAccessor::new("count", "count")
                .with_set(|this: &mut Self, value| {
                    this.count = private::from_value("count", value)?;
                    Ok(())
                })
                .with_get(|this| private::to_value("count", &this.count)),
        ];

        const STRICT: bool = false;
    }

    #[test]
    fn aliases_resolve_one_field() {
        let mut options = Derived::default();
        for name in ["count", "Count", "COUNT"] {
            options.set(name, 7).unwrap();
            assert_eq!(options.count, 7, "set via {name:?}");
            options.count = 0;
        }
    }

    #[test]
    fn strict_set_fails_for_unknown_option() {
        let mut options = Derived::default();
        let error = options.set("missing", 1).unwrap_err();
        assert!(matches!(error, Error::UndefinedSetter { .. }), "{error}");
    }

    #[test]
    fn strict_get_fails_for_unknown_option() {
        let options = Derived::default();
        let error = options.get("missing").unwrap_err();
        assert!(matches!(error, Error::UndefinedGetter { .. }), "{error}");
    }

    #[test]
    fn lax_set_is_a_noop_for_unknown_option() {
        let mut options = Lax::default();
        options.set("missing", 1).unwrap();
        assert_eq!(options.count, 0);
    }

    #[test]
    fn lax_get_yields_null_for_unknown_option() {
        let options = Lax::default();
        assert_eq!(options.get("missing").unwrap(), Value::Null);
    }

    #[test]
    fn contains_is_true_for_falsy_but_present_values() {
        let mut options = Lax::default();
        assert!(options.contains("count"), "0 counts as present");
        options.set("count", 3).unwrap();
        assert!(options.contains("count"));
    }

    #[test]
    fn contains_is_false_without_a_getter() {
        let mut options = Base::default();
        options.set("hidden", 5).unwrap();
        assert_eq!(options.hidden, 5);
        assert!(!options.contains("hidden"));
    }

    #[test]
    fn contains_is_false_for_null() {
        let mut options = Base::default();
        assert!(!options.contains("label"));
        options.set("label", "x").unwrap();
        assert!(options.contains("label"));
    }

    #[test]
    fn unset_clears_through_the_setter() {
        let mut options = Base::default();
        options.set("label", "x").unwrap();
        options.unset("label").unwrap();
        assert_eq!(options.label, None);
        assert!(!options.contains("label"));
    }

    #[test]
    fn unset_fails_for_unknown_option_even_without_strict_mode() {
        let mut options = Lax::default();
        let error = options.unset("missing").unwrap_err();
        assert!(matches!(error, Error::CannotUnset { .. }), "{error}");
    }

    #[test]
    fn unset_rejects_non_nullable_fields() {
        let mut options = Lax::default();
        let error = options.unset("count").unwrap_err();
        assert!(matches!(error, Error::InvalidValue { .. }), "{error}");
    }

    #[test]
    fn flattened_member_resolves_through_outer() {
        let mut options = Derived::default();
        options.set("hidden", 9).unwrap();
        assert_eq!(options.base.hidden, 9);
    }

    #[test]
    fn outer_entry_shadows_flattened_member() {
        let mut options = Derived::default();
        options.set("label", "outer").unwrap();
        assert_eq!(options.label.as_deref(), Some("outer"));
        assert_eq!(options.base.label, None);
    }

    #[test]
    fn to_map_merges_with_outer_priority() {
        let mut options = Derived::default();
        options.set("count", 2).unwrap();
        options.base.label = Some("inner".to_owned());

        let map = options.to_map().unwrap();
        assert_eq!(map.len(), 2, "hidden has no getter: {map:?}");
        assert_eq!(map["count"], json!(2));
        assert_eq!(map["label"], Value::Null, "outer label shadows inner");
    }

    #[test]
    fn conversion_failures_are_not_strict_gated() {
        let mut options = Lax::default();
        let error = options.set("count", "nope").unwrap_err();
        assert!(matches!(error, Error::InvalidValue { .. }), "{error}");
    }
}
