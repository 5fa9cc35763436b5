use std::iter;

use crate::segmenter::{Pad, Segmenter};

/// Shared engine behind [`Segmenter::pad`].
pub(crate) fn pad<S>(seg: &S, text: &str, length: usize, pad: &str, side: Pad) -> String
where
    S: Segmenter + ?Sized,
{
    let padding = length.saturating_sub(seg.count(text));
    let pad_units = seg.count(pad);
    if padding == 0 || pad_units == 0 {
        return text.to_owned();
    }

    let repeat = padding / pad_units;
    match side {
        Pad::Left => {
            let tail = seg.slice(pad, 0, padding % pad_units);

            let mut result =
                String::with_capacity(repeat * pad.len() + tail.len() + text.len());
            result.extend(iter::repeat_n(pad, repeat));
            result.push_str(tail);
            result.push_str(text);
            result
        }
        Pad::Right => {
            let tail = seg.slice(pad, 0, padding % pad_units);

            let mut result =
                String::with_capacity(text.len() + repeat * pad.len() + tail.len());
            result.push_str(text);
            result.extend(iter::repeat_n(pad, repeat));
            result.push_str(tail);
            result
        }
        Pad::Both => {
            // a fill that doesn't split into whole repeats on both sides
            // falls back to leading slices, with the extra unit on the right
            let side_repeat = repeat / 2;
            let rest = padding - 2 * side_repeat * pad_units;
            let left = seg.slice(pad, 0, rest / 2);
            let right = seg.slice(pad, 0, rest / 2 + rest % 2);

            let mut result = String::with_capacity(
                2 * side_repeat * pad.len() + left.len() + right.len() + text.len(),
            );
            result.extend(iter::repeat_n(pad, side_repeat));
            result.push_str(left);
            result.push_str(text);
            result.extend(iter::repeat_n(pad, side_repeat));
            result.push_str(right);
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pad;
    use crate::chars::Chars;
    use crate::segmenter::Pad;

    #[test]
    fn fills_the_chosen_side() {
        assert_eq!(pad(&Chars, "abc", 6, "-", Pad::Right), "abc---");
        assert_eq!(pad(&Chars, "abc", 6, "-", Pad::Left), "---abc");
        assert_eq!(pad(&Chars, "abc", 7, "-", Pad::Both), "--abc--");
    }

    #[test]
    fn partial_repeats_use_a_leading_slice() {
        assert_eq!(pad(&Chars, "abc", 7, "xy", Pad::Left), "xyxyabc");
        assert_eq!(pad(&Chars, "ab", 4, "xyz", Pad::Right), "abxy");
        assert_eq!(pad(&Chars, "abc", 8, "xyz", Pad::Both), "xyabcxyz");
    }

    #[test]
    fn uneven_both_fill_leans_right() {
        assert_eq!(pad(&Chars, "x", 4, "-", Pad::Both), "-x--");
        assert_eq!(pad(&Chars, "ab", 10, "xy", Pad::Both), "xyxyabxyxy");
    }

    #[test]
    fn multibyte_padding_counts_in_units() {
        assert_eq!(pad(&Chars, "クレイ", 6, "・", Pad::Right), "クレイ・・・");
        assert_eq!(pad(&Chars, "7", 3, "0", Pad::Left), "007");
    }

    #[test]
    fn long_enough_text_stays_unchanged() {
        assert_eq!(pad(&Chars, "hello", 5, "-", Pad::Right), "hello");
        assert_eq!(pad(&Chars, "hello", 3, "-", Pad::Left), "hello");
    }

    #[test]
    fn empty_pad_text_stays_unchanged() {
        assert_eq!(pad(&Chars, "hi", 10, "", Pad::Right), "hi");
    }
}
