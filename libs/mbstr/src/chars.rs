use crate::segmenter::Segmenter;

/// Backend whose unit is one Unicode scalar value.
///
/// This matches [`str::chars`] and is the cheaper choice when combining
/// marks don't matter for the use case.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chars;

impl Segmenter for Chars {
    fn count(&self, text: &str) -> usize {
        text.chars().count()
    }

    fn slice<'s>(&self, text: &'s str, start: usize, len: usize) -> &'s str {
        let begin = byte_at(text, start);
        let end = byte_at(text, start.saturating_add(len));
        &text[begin..end]
    }

    fn find(&self, text: &str, needle: &str, from: usize) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }

        let begin = byte_at(text, from);
        let offset = text[begin..].find(needle)?;
        Some(from + text[begin..begin + offset].chars().count())
    }
}

/// Byte offset of the char at `index`, or the text's length when `index` is
/// past the last char.
fn byte_at(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}
