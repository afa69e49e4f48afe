#![warn(missing_docs)]

//! Locale-aware edit distance for fuzzy text matching.
//!
//! `localematch` scores how close a sample string is to a referent string the
//! way a reader of a given language would: text is compared one character
//! cluster at a time, clusters are equal when the locale's collation says so
//! (case- and accent-insensitive by default), runs of whitespace count once,
//! and ASCII punctuation is ignored. Inputs the locale cannot handle are
//! compared byte by byte instead, so every call yields a score.
//!
//! ```
//! use localematch::Matcher;
//!
//! let matcher = Matcher::new("en_US.UTF-8").unwrap();
//! assert_eq!(matcher.match_factor("Hello, World!", "hello   world"), 1.0);
//! assert!(matcher.match_factor("color", "colour") > 0.8);
//! ```

/// Generic Levenshtein distance engine.
pub mod distance;

/// Error types.
pub mod error;

/// Types accepted as matcher input.
pub mod input;

/// Locale capabilities and the Unicode-backed provider.
pub mod locale;

/// The matcher and its results.
pub mod matcher;

/// Configuration options for a matcher.
pub mod options;

/// Ranking candidates against a referent.
pub mod rank;

/// Segmentation into filtered symbol sequences.
pub mod segment;

// Re-export primary public API types and functions at the crate root.
pub use error::{CollationError, LocaleError, MatchError, SegmentationError};
pub use input::AsMatchInput;
pub use locale::{CharClass, LocaleContext, LocaleId, Strength, UnicodeLocale};
pub use matcher::{EditDistance, Matcher, UnitKind};
pub use options::MatcherOptions;
pub use rank::{RankedCandidate, compare_ranked};
