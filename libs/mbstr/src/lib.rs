//! Unit-aware text operations over UTF-8 strings.
//!
//! Byte positions are the wrong currency for user-facing text handling, and
//! which positions are the right one depends on the use case. [`Segmenter`]
//! abstracts that choice away: [`Chars`] measures in Unicode scalar values
//! and [`Graphemes`] in extended grapheme clusters, and counting, slicing,
//! searching, display width, word wrapping and padding all operate in the
//! chosen unit.
//!
//! ```
//! use mbstr::{Chars, Graphemes, Pad, Segmenter};
//!
//! let text = "cafe\u{301} menu";
//! assert_eq!(Chars.count(text), 10);
//! assert_eq!(Graphemes.count(text), 9);
//!
//! let wrapped = Chars.word_wrap("The quick brown fox", 10, "\n", false)?;
//! assert_eq!(wrapped, "The quick\nbrown fox");
//!
//! assert_eq!(Chars.pad("7", 3, "0", Pad::Left), "007");
//! # Ok::<_, mbstr::Error>(())
//! ```

mod chars;
mod error;
mod graphemes;
mod pad_impl;
mod segmenter;
mod wrap_impl;

pub use chars::Chars;
pub use error::{Error, Result};
pub use graphemes::Graphemes;
pub use segmenter::{Pad, Segmenter};
