//! Error types for locale resolution and locale-aware processing.
//!
//! Only [`LocaleError`] ever reaches a caller. [`SegmentationError`] and
//! [`CollationError`] are produced by a [`LocaleContext`](crate::LocaleContext)
//! and absorbed by the [`Matcher`](crate::Matcher), which degrades to a
//! byte-wise comparison for the affected call.

use thiserror::Error;

use crate::locale::Strength;

/// Boundary analysis could not process an input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentationError {
    /// The input is not valid UTF-8. `valid_up_to` is the length of the
    /// longest valid prefix, in bytes.
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        /// Byte offset of the first invalid sequence.
        valid_up_to: usize,
    },

    /// The provider cannot segment text for this locale.
    #[error("segmentation unavailable: {0}")]
    Unavailable(String),
}

/// Collation or character classification failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollationError {
    /// The provider has no collation or classification facility.
    #[error("collation unavailable: {0}")]
    Unavailable(String),

    /// The provider cannot compare at the requested strength.
    #[error("collation strength {strength:?} is not supported")]
    Unsupported {
        /// The strength that was requested.
        strength: Strength,
    },
}

/// A locale identifier could not be resolved.
///
/// This is the only error a [`Matcher`](crate::Matcher) constructor returns;
/// once constructed, every matching operation yields a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The identifier was empty or only whitespace.
    #[error("locale identifier is empty")]
    Empty,

    /// The identifier does not follow `lang[_REGION][.encoding][@modifier]`.
    #[error("malformed locale identifier: {0:?}")]
    Malformed(String),

    /// The identifier names an encoding other than UTF-8.
    #[error("unsupported locale encoding: {0:?}")]
    UnsupportedEncoding(String),
}

/// Why the locale-aware path could not produce a distance.
///
/// Returned by [`Matcher::try_edit_distance`](crate::Matcher::try_edit_distance);
/// [`Matcher::edit_distance`](crate::Matcher::edit_distance) recovers from it
/// by comparing raw bytes instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Segmenting one of the inputs failed.
    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    /// Classifying or comparing segments failed.
    #[error(transparent)]
    Collation(#[from] CollationError),
}
