//! Proc macros for the `options_model` crate.

use proc_macro::TokenStream as StdTokenStream;
use syn::DeriveInput;

mod args;
mod options_impl;

/// Derives the `Options` trait for a struct with named fields.
///
/// Each field becomes an option that is written and read through the
/// dynamic accessors on `Options`. Lookup normalizes the requested name,
/// so `retry_count`, `retryCount`, and `"retry count"` all address the
/// same field.
///
/// Values cross the dynamic surface as `serde_json::Value`, so every
/// field type must implement `Serialize` and `DeserializeOwned`. Type
/// parameters get these bounds, plus the `'static` the accessor tables
/// need, emitted into the `where` clause.
///
/// ### Field attributes
///
/// - `#[option(rename = "...")]`: address the field by this name instead
///   of the field name.
/// - `#[option(skip)]`: hide the field from dynamic access entirely.
/// - `#[option(skip_set)]` / `#[option(skip_get)]`: hide one direction.
/// - `#[option(flatten)]`: the field's own `Options` are resolved through
///   this object as well. The field itself is not an option.
/// - `#[option(set_with = path)]` / `#[option(get_with = path)]`: use the
///   given function in place of the generated accessor. A setter takes
///   `&mut Self` and the new `serde_json::Value`, a getter takes `&Self`
///   and returns the current value, and both return
///   `options_model::Result`.
///
/// ### Struct attributes
///
/// - `#[option(strict = false)]`: drop writes and reads of unknown
///   options instead of returning an error.
/// - `#[option(crate = path)]`: override the path to the `options_model`
///   crate.
#[proc_macro_derive(Options, attributes(option))]
pub fn derive_options(input: StdTokenStream) -> StdTokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    options_impl::entry_point(input)
        .unwrap_or_else(|e| e.write_errors())
        .into()
}
