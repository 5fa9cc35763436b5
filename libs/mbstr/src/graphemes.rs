use unicode_segmentation::UnicodeSegmentation as _;

use crate::segmenter::Segmenter;

/// Backend whose unit is one extended grapheme cluster.
///
/// Combining sequences, emoji with modifiers and other multi-scalar clusters
/// each count as a single unit, matching what a reader perceives as one
/// character.
#[derive(Debug, Clone, Copy, Default)]
pub struct Graphemes;

impl Segmenter for Graphemes {
    fn count(&self, text: &str) -> usize {
        text.graphemes(true).count()
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
        for (units, (offset, _)) in text[begin..].grapheme_indices(true).enumerate() {
            let candidate = &text[begin + offset..];
            if candidate.starts_with(needle) && is_boundary(candidate, needle.len()) {
                return Some(from + units);
            }
        }

        None
    }
}

/// Byte offset of the cluster at `index`, or the text's length when `index`
/// is past the last cluster.
fn byte_at(text: &str, index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Whether the byte offset `at` lands on a cluster boundary of `text`.
fn is_boundary(text: &str, at: usize) -> bool {
    if at == text.len() {
        return true;
    }

    text.grapheme_indices(true)
        .take_while(|&(offset, _)| offset <= at)
        .any(|(offset, _)| offset == at)
}

#[cfg(test)]
mod tests {
    use super::Graphemes;
    use crate::segmenter::Segmenter as _;

    #[test]
    fn count_is_in_clusters() {
        assert_eq!(Graphemes.count(""), 0);
        assert_eq!(Graphemes.count("abc"), 3);
        // 'e' plus combining acute is one cluster
        assert_eq!(Graphemes.count("e\u{301}f"), 2);
        assert_eq!(Graphemes.count("🏳\u{fe0f}\u{200d}🌈"), 1);
    }

    #[test]
    fn slice_keeps_clusters_intact() {
        let text = "e\u{301}fg";
        assert_eq!(Graphemes.slice(text, 0, 1), "e\u{301}");
        assert_eq!(Graphemes.slice(text, 1, 2), "fg");
        assert_eq!(Graphemes.slice(text, 2, 5), "g");
        assert_eq!(Graphemes.slice(text, 3, 1), "");
    }

    #[test]
    fn find_reports_cluster_positions() {
        let text = "e\u{301}fe\u{301}f";
        assert_eq!(Graphemes.find(text, "f", 0), Some(1));
        assert_eq!(Graphemes.find(text, "f", 2), Some(3));
        assert_eq!(Graphemes.find(text, "e\u{301}", 1), Some(2));
        assert_eq!(Graphemes.find(text, "", 0), None);
    }

    #[test]
    fn find_only_matches_whole_clusters() {
        // the bare 'e' occurs only inside the first cluster
        assert_eq!(Graphemes.find("e\u{301}f", "e", 0), None);
        assert_eq!(Graphemes.find("e\u{301}f", "ef", 0), None);
    }
}
