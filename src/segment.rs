//! Turning raw input into the symbol sequence compared by the matcher.
//!
//! An input is split into character clusters by a [`LocaleContext`], then
//! clusters that carry no signal for matching are dropped: every whitespace
//! character that directly follows another one, and every punctuation
//! character. Only clusters one byte long are ever dropped; longer clusters
//! (most non-ASCII text, including non-ASCII spaces and punctuation) are
//! always kept.

use crate::error::{CollationError, MatchError};
use crate::locale::{CharClass, LocaleContext};

/// Whether `segment` should be left out of the symbol sequence.
///
/// `previous` is the segment that came right before `segment` in the
/// unfiltered stream, or `""` for the first segment of an input. It is not
/// the previously *kept* symbol, so a run of spaces collapses to its first
/// member even when punctuation sits in front of it.
///
/// # Errors
///
/// Propagates classification failures from `locale`.
///
/// # Examples
///
/// ```
/// use localematch::UnicodeLocale;
/// use localematch::segment::ignore;
///
/// let locale = UnicodeLocale::new("en_US").unwrap();
/// assert_eq!(ignore(&locale, " ", " "), Ok(true));
/// assert_eq!(ignore(&locale, " ", "a"), Ok(false));
/// assert_eq!(ignore(&locale, "!", "a"), Ok(true));
/// assert_eq!(ignore(&locale, "\u{00bf}", "a"), Ok(false));
/// ```
pub fn ignore<L: LocaleContext>(
    locale: &L,
    segment: &str,
    previous: &str,
) -> Result<bool, CollationError> {
    // Classification is only trusted for single-byte clusters.
    if segment.len() != 1 {
        return Ok(false);
    }

    let class = locale.classify(segment)?;
    if class == CharClass::Whitespace
        && previous.len() == 1
        && locale.classify(previous)? == CharClass::Whitespace
    {
        return Ok(true);
    }

    Ok(class == CharClass::Punctuation)
}

/// Segment `text` and filter it into a symbol sequence.
///
/// # Errors
///
/// Returns [`MatchError::Segmentation`] when `locale` cannot segment `text`
/// and [`MatchError::Collation`] when it cannot classify a segment.
///
/// # Examples
///
/// ```
/// use localematch::UnicodeLocale;
/// use localematch::segment::symbols;
///
/// let locale = UnicodeLocale::new("en_US").unwrap();
/// assert_eq!(symbols(&locale, b"a  b!").unwrap(), vec!["a", " ", "b"]);
/// assert!(symbols(&locale, b"\xff").is_err());
/// ```
pub fn symbols<'a, L: LocaleContext>(
    locale: &'a L,
    text: &'a [u8],
) -> Result<Vec<&'a str>, MatchError> {
    let mut symbols = Vec::with_capacity(text.len());
    let mut previous = "";
    for segment in locale.segments(text) {
        let segment = segment?;
        if !ignore(locale, segment, previous)? {
            symbols.push(segment);
        }
        previous = segment;
    }
    Ok(symbols)
}
