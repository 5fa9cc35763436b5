use crate::error::{Error, Result};
use crate::segmenter::Segmenter;

/// Shared engine behind [`Segmenter::word_wrap`].
///
/// Scans the text one unit at a time, tracking the start of the current
/// line and the last space seen, and flushes a line whenever a break is
/// found in the input or the width limit is crossed.
pub(crate) fn word_wrap<S>(
    seg: &S,
    text: &str,
    width: usize,
    brk: &str,
    cut: bool,
) -> Result<String>
where
    S: Segmenter + ?Sized,
{
    if text.is_empty() {
        return Ok(String::new());
    }

    if brk.is_empty() {
        return Err(Error::EmptyBreak);
    }

    if width == 0 && cut {
        return Err(Error::ZeroWidthCut);
    }

    let text_units = seg.count(text);
    let break_units = seg.count(brk);

    let mut result = String::new();
    let mut last_start = 0;
    let mut last_space = 0;

    let mut current = 0;
    while current < text_units {
        let unit = seg.slice(text, current, 1);
        let possible_break = if break_units == 1 {
            unit
        } else {
            seg.slice(text, current, break_units)
        };

        if possible_break == brk {
            // keep the existing break and start a fresh line after it
            result.push_str(seg.slice(text, last_start, current - last_start + break_units));
            current += break_units - 1;
            last_start = current + 1;
            last_space = last_start;
        } else if unit == " " {
            if current - last_start >= width {
                result.push_str(seg.slice(text, last_start, current - last_start));
                result.push_str(brk);
                last_start = current + 1;
            }

            last_space = current;
        } else if current - last_start >= width && cut && last_start >= last_space {
            // no space to break at, split the word at the limit
            result.push_str(seg.slice(text, last_start, current - last_start));
            result.push_str(brk);
            last_start = current;
            last_space = current;
        } else if current - last_start >= width && last_start < last_space {
            result.push_str(seg.slice(text, last_start, last_space - last_start));
            result.push_str(brk);
            last_start = last_space + 1;
            last_space = last_start;
        }

        current += 1;
    }

    // whatever is left is the final line
    if last_start != current {
        result.push_str(seg.slice(text, last_start, current - last_start));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::word_wrap;
    use crate::chars::Chars;
    use crate::error::Error;

    #[test]
    fn breaks_at_spaces() {
        let wrapped = word_wrap(&Chars, "The quick brown fox", 10, "\n", false);
        assert_eq!(wrapped.unwrap(), "The quick\nbrown fox");
    }

    #[test]
    fn short_text_stays_unchanged() {
        let wrapped = word_wrap(&Chars, "short", 10, "\n", false);
        assert_eq!(wrapped.unwrap(), "short");
    }

    #[test]
    fn cut_splits_inside_words() {
        let wrapped = word_wrap(&Chars, "abcdefgh", 3, "\n", true);
        assert_eq!(wrapped.unwrap(), "abc\ndef\ngh");
    }

    #[test]
    fn long_words_stay_intact_without_cut() {
        let wrapped = word_wrap(&Chars, "no wraaaaaaaaaaap", 5, "\n", false);
        assert_eq!(wrapped.unwrap(), "no\nwraaaaaaaaaaap");

        let wrapped = word_wrap(&Chars, "A very long woooooooooooord.", 8, "\n", true);
        assert_eq!(wrapped.unwrap(), "A very\nlong\nwooooooo\nooooord.");
    }

    #[test]
    fn existing_breaks_reset_the_line() {
        let wrapped = word_wrap(&Chars, "one\ntwo three", 5, "\n", false);
        assert_eq!(wrapped.unwrap(), "one\ntwo\nthree");
    }

    #[test]
    fn break_text_may_span_several_units() {
        let text = "The quick brown fox sat over the lazy dog";
        let wrapped = word_wrap(&Chars, text, 15, "<br />\n", true);
        assert_eq!(
            wrapped.unwrap(),
            "The quick brown<br />\nfox sat over<br />\nthe lazy dog"
        );
    }

    #[test]
    fn narrow_width_wraps_every_word() {
        let wrapped = word_wrap(&Chars, "a b c d", 2, "\n", false);
        assert_eq!(wrapped.unwrap(), "a\nb\nc\nd");
    }

    #[test]
    fn multibyte_text_cuts_between_units() {
        let wrapped = word_wrap(&Chars, "ヴァンプライ", 2, "-", true);
        assert_eq!(wrapped.unwrap(), "ヴァ-ンプ-ライ");
    }

    #[test]
    fn empty_text_wraps_to_empty() {
        // checked before the argument validation kicks in
        let wrapped = word_wrap(&Chars, "", 5, "", true);
        assert_eq!(wrapped.unwrap(), "");
    }

    #[test]
    fn empty_break_is_rejected() {
        let wrapped = word_wrap(&Chars, "text", 5, "", false);
        assert!(matches!(wrapped, Err(Error::EmptyBreak)));
    }

    #[test]
    fn cut_at_zero_width_is_rejected() {
        let wrapped = word_wrap(&Chars, "text", 0, "\n", true);
        assert!(matches!(wrapped, Err(Error::ZeroWidthCut)));
    }
}
