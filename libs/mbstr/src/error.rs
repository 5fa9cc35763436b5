//! Error handling types.

pub type Result<T> = std::result::Result<T, Error>;

/// Potential errors for segmented text operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Word wrapping was asked to insert an empty line break.
    #[error("break string cannot be empty")]
    EmptyBreak,
    /// Word wrapping was asked to force-cut lines of zero width.
    #[error("cannot force cut when width is zero")]
    ZeroWidthCut,
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_name_the_rejected_argument() {
        assert_eq!(Error::EmptyBreak.to_string(), "break string cannot be empty");
        assert_eq!(
            Error::ZeroWidthCut.to_string(),
            "cannot force cut when width is zero"
        );
    }
}
