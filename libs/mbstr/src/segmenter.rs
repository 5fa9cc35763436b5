use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::{pad_impl, wrap_impl};

/// Which side of the text [`Segmenter::pad`] fills.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pad {
    /// Fill on the left, pushing the text right.
    Left,
    /// Fill on the right.
    #[default]
    Right,
    /// Fill both sides. An uneven fill puts the extra unit on the right.
    Both,
}

/// A unit-aware view over UTF-8 text.
///
/// A "unit" is whatever the backend treats as one character: [`Chars`] counts
/// Unicode scalar values, [`Graphemes`] counts extended grapheme clusters.
/// Every position and length taken or returned by this trait is measured in
/// those units, never in bytes.
///
/// The composite operations are provided on top of the three primitive
/// lookups, so the same wrapping and padding semantics apply to every
/// backend. The trait is object-safe; pick a backend at runtime and pass it
/// around as `&dyn Segmenter` where the unit choice is a caller concern.
///
/// [`Chars`]: crate::Chars
/// [`Graphemes`]: crate::Graphemes
pub trait Segmenter {
    /// Counts the units in `text`.
    fn count(&self, text: &str) -> usize;

    /// Slices `text` by unit positions.
    ///
    /// Takes up to `len` units starting at `start`. Positions past the end
    /// of the text are clamped, so an out-of-range request returns a shorter
    /// or empty slice rather than panicking.
    fn slice<'s>(&self, text: &'s str, start: usize, len: usize) -> &'s str;

    /// Finds the unit position of the first occurrence of `needle` within
    /// `text`, ignoring anything before the unit position `from`.
    ///
    /// The match must cover whole units, so a needle that stops partway
    /// into a unit of `text` does not count. An empty needle is never
    /// found.
    fn find(&self, text: &str, needle: &str, from: usize) -> Option<usize>;

    /// Returns the display width of `text` in terminal columns.
    ///
    /// Width is a property of the text rather than of the segmentation
    /// units, so every backend agrees on it. Zero-width code points count
    /// as zero and East Asian wide forms count as two columns.
    fn width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    /// Wraps `text` into lines of at most `width` units joined by `brk`.
    ///
    /// Lines break at spaces where possible. A word longer than `width`
    /// stays intact on its own line unless `cut` is set, in which case it is
    /// split mid-word at the width limit. Line breaks already present in
    /// `text` (that is, occurrences of `brk`) are kept and reset the count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBreak`](crate::Error::EmptyBreak) if `brk` is
    /// empty, and [`Error::ZeroWidthCut`](crate::Error::ZeroWidthCut) if
    /// `cut` is set while `width` is zero.
    fn word_wrap(&self, text: &str, width: usize, brk: &str, cut: bool) -> Result<String> {
        wrap_impl::word_wrap(self, text, width, brk, cut)
    }

    /// Pads `text` with `pad` until it is `length` units long.
    ///
    /// The `side` picks where the fill goes. When the fill does not divide
    /// evenly into repetitions of `pad`, the remainder is a leading slice of
    /// `pad`. Text already at or beyond `length` units and an empty `pad`
    /// both come back unchanged.
    fn pad(&self, text: &str, length: usize, pad: &str, side: Pad) -> String {
        pad_impl::pad(self, text, length, pad, side)
    }
}
