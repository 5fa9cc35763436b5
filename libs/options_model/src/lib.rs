//! Typed options objects with validated dynamic access via a derive macro.
//!
//! Deriving [`Options`] on a plain struct turns it into a configuration
//! value object whose fields can be addressed by external names: `snake_case`,
//! `camelCase`, and space-separated spellings all resolve the same field, and
//! unknown names either fail or fall through silently depending on the
//! type's strict mode. Seeding works from maps, pair sequences, JSON
//! objects, or other options objects.
//!
//! ```
//! use options_model::Options;
//! use serde_json::json;
//!
//! #[derive(Debug, Default, Options)]
//! struct RetryOptions {
//!     limit: u32,
//!     delay_ms: Option<u64>,
//! }
//!
//! let mut options = RetryOptions::from_source(json!({
//!     "limit": 3,
//!     "delayMs": 250,
//! }))?;
//!
//! assert_eq!(options.limit, 3);
//! assert!(options.contains("delay_ms"));
//!
//! options.unset("delay_ms")?;
//! assert_eq!(options.delay_ms, None);
//! # Ok::<_, options_model::Error>(())
//! ```

// for benchmarks
#[cfg(test)]
use criterion as _;

mod error;
mod model;
mod name;
#[doc(hidden)]
pub mod private;
mod source;

pub use ::options_model_macros::Options;
pub use error::{Error, Result};
pub use model::{
    AsDynFn, AsDynMutFn, DynOptions, FieldAccessor, Flattened, GetFn, Options, SetFn, TrySet,
};
pub use source::{Entries, OptionsSource};
