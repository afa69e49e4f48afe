//! Locale-aware edit distance between a referent and a sample.
//!
//! [`Matcher`] runs the full pipeline: both inputs are segmented into
//! character clusters and filtered into symbol sequences, and the sequences
//! are compared with Levenshtein distance under collation equality. When the
//! locale cannot process an input, the call is answered by comparing the raw
//! bytes instead, and the returned [`EditDistance`] says so through its
//! [`UnitKind`].

use std::cmp::Ordering;

use log::{debug, trace};

use crate::distance::{levenshtein, try_levenshtein};
use crate::error::{CollationError, LocaleError, MatchError};
use crate::input::AsMatchInput;
use crate::locale::{LocaleContext, UnicodeLocale};
use crate::options::MatcherOptions;
use crate::segment::symbols;

/// What one unit of an [`EditDistance`] counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Filtered character clusters (the locale-aware path ran).
    Cluster,
    /// Raw bytes (the byte-wise fallback ran).
    Byte,
}

/// Result of comparing a referent with a sample.
///
/// `referent_units` and `sample_units` are the lengths of the sequences that
/// were actually compared, counted in `units`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditDistance {
    /// Minimum number of insertions, deletions and substitutions.
    pub distance: usize,
    /// Length of the referent sequence.
    pub referent_units: usize,
    /// Length of the sample sequence.
    pub sample_units: usize,
    /// Whether lengths count clusters or bytes.
    pub units: UnitKind,
}

impl EditDistance {
    /// `distance / max(1, referent_units, sample_units)`, in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use localematch::{EditDistance, UnitKind};
    ///
    /// let d = EditDistance {
    ///     distance: 1,
    ///     referent_units: 4,
    ///     sample_units: 3,
    ///     units: UnitKind::Cluster,
    /// };
    /// assert_eq!(d.normalized(), 0.25);
    ///
    /// let empty = EditDistance { distance: 0, referent_units: 0, sample_units: 0, ..d };
    /// assert_eq!(empty.normalized(), 0.0);
    /// ```
    pub fn normalized(&self) -> f64 {
        let longest = self.referent_units.max(self.sample_units).max(1);
        self.distance as f64 / longest as f64
    }

    /// `1 - normalized()`: 1 for identical inputs, 0 for nothing in common.
    pub fn match_factor(&self) -> f64 {
        1.0 - self.normalized()
    }
}

/// Computes edit distances and match factors under one locale.
///
/// The locale is resolved once at construction and never changes. A
/// `Matcher` holds no per-call state and can be shared between threads.
///
/// # Examples
///
/// ```
/// use localematch::Matcher;
///
/// let matcher = Matcher::new("en_US.UTF-8").unwrap();
///
/// // Punctuation is ignored and case is folded.
/// assert_eq!(matcher.edit_distance("Hello, World!", "hello world").distance, 0);
///
/// // One substitution out of five clusters.
/// assert_eq!(matcher.match_factor("hello", "hallo"), 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct Matcher<L = UnicodeLocale> {
    locale: L,
    options: MatcherOptions,
}

impl Matcher {
    /// Build a matcher for `locale_id` with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError`] if `locale_id` cannot be resolved.
    pub fn new(locale_id: &str) -> Result<Self, LocaleError> {
        Self::with_options(locale_id, MatcherOptions::default())
    }

    /// Build a matcher for `locale_id` with the given options.
    ///
    /// # Errors
    ///
    /// Returns a [`LocaleError`] if `locale_id` cannot be resolved.
    pub fn with_options(locale_id: &str, options: MatcherOptions) -> Result<Self, LocaleError> {
        let locale = UnicodeLocale::new(locale_id)?;
        debug!(
            "matcher for locale {} at {:?} strength",
            locale.id(),
            options.strength
        );
        Ok(Self::from_locale(locale, options))
    }
}

impl<L: LocaleContext> Matcher<L> {
    /// Build a matcher over any [`LocaleContext`].
    pub fn from_locale(locale: L, options: MatcherOptions) -> Self {
        Self { locale, options }
    }

    /// The locale this matcher compares under.
    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// The options this matcher was built with.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Collation equality of two clusters at the configured strength.
    ///
    /// # Errors
    ///
    /// Propagates the locale's [`CollationError`].
    pub fn equal(&self, a: &str, b: &str) -> Result<bool, CollationError> {
        let ordering = self.locale.compare(a, b, self.options.strength)?;
        Ok(ordering == Ordering::Equal)
    }

    /// The filtered symbol sequence of `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] if `text` cannot be segmented or classified.
    pub fn symbols<'a, T>(&'a self, text: &'a T) -> Result<Vec<&'a str>, MatchError>
    where
        T: AsMatchInput + ?Sized,
    {
        symbols(&self.locale, text.as_match_bytes())
    }

    /// Locale-aware edit distance, without the byte-wise fallback.
    ///
    /// For callers that need to know the locale-aware comparison failed;
    /// [`edit_distance`](Matcher::edit_distance) never reports it.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] if either input cannot be segmented, or if
    /// classification or collation fails.
    pub fn try_edit_distance<R, S>(
        &self,
        referent: &R,
        sample: &S,
    ) -> Result<EditDistance, MatchError>
    where
        R: AsMatchInput + ?Sized,
        S: AsMatchInput + ?Sized,
    {
        let referent = self.symbols(referent)?;
        let sample = self.symbols(sample)?;
        trace!(
            "comparing {} referent and {} sample symbols",
            referent.len(),
            sample.len()
        );

        let distance = try_levenshtein(&referent, &sample, |a, b| self.equal(a, b))?;
        Ok(EditDistance {
            distance,
            referent_units: referent.len(),
            sample_units: sample.len(),
            units: UnitKind::Cluster,
        })
    }

    /// Edit distance between `referent` and `sample`.
    ///
    /// Falls back to comparing raw bytes with plain equality when the
    /// locale-aware path fails; [`EditDistance::units`] is then
    /// [`UnitKind::Byte`] and the lengths are byte lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use localematch::{Matcher, UnitKind};
    ///
    /// let matcher = Matcher::new("en_US").unwrap();
    ///
    /// let d = matcher.edit_distance("a  b", "a b");
    /// assert_eq!((d.distance, d.referent_units, d.units), (0, 3, UnitKind::Cluster));
    ///
    /// // Not UTF-8: compared byte by byte.
    /// let d = matcher.edit_distance(b"caf\xe9", "cafe");
    /// assert_eq!((d.distance, d.referent_units, d.units), (1, 4, UnitKind::Byte));
    /// ```
    pub fn edit_distance<R, S>(&self, referent: &R, sample: &S) -> EditDistance
    where
        R: AsMatchInput + ?Sized,
        S: AsMatchInput + ?Sized,
    {
        match self.try_edit_distance(referent, sample) {
            Ok(distance) => distance,
            Err(err) => {
                debug!("locale-aware comparison failed, comparing bytes: {err}");
                byte_edit_distance(referent.as_match_bytes(), sample.as_match_bytes())
            }
        }
    }

    /// [`edit_distance`](Self::edit_distance) scaled by the longer input, in `[0, 1]`.
    pub fn norm_edit_distance<R, S>(&self, referent: &R, sample: &S) -> f64
    where
        R: AsMatchInput + ?Sized,
        S: AsMatchInput + ?Sized,
    {
        self.edit_distance(referent, sample).normalized()
    }

    /// `1 - norm_edit_distance`: 1 for a perfect match, 0 for none.
    pub fn match_factor<R, S>(&self, referent: &R, sample: &S) -> f64
    where
        R: AsMatchInput + ?Sized,
        S: AsMatchInput + ?Sized,
    {
        self.edit_distance(referent, sample).match_factor()
    }
}

fn byte_edit_distance(referent: &[u8], sample: &[u8]) -> EditDistance {
    EditDistance {
        distance: levenshtein(referent, sample, |a, b| a == b),
        referent_units: referent.len(),
        sample_units: sample.len(),
        units: UnitKind::Byte,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Strength;

    fn en() -> Matcher {
        Matcher::new("en_US.UTF-8").unwrap()
    }

    // --- EditDistance ---

    #[test]
    fn normalized_clamps_denominator() {
        let d = EditDistance {
            distance: 0,
            referent_units: 0,
            sample_units: 0,
            units: UnitKind::Byte,
        };
        assert_eq!(d.normalized(), 0.0);
        assert_eq!(d.match_factor(), 1.0);
    }

    #[test]
    fn normalized_uses_longer_side() {
        let d = EditDistance {
            distance: 3,
            referent_units: 2,
            sample_units: 4,
            units: UnitKind::Cluster,
        };
        assert_eq!(d.normalized(), 0.75);
        assert_eq!(d.match_factor(), 0.25);
    }

    // --- construction ---

    #[test]
    fn new_rejects_unresolvable_locale() {
        assert_eq!(Matcher::new("").unwrap_err(), LocaleError::Empty);
        assert!(matches!(
            Matcher::new("not a locale"),
            Err(LocaleError::Malformed(_))
        ));
    }

    #[test]
    fn new_uses_default_options() {
        assert_eq!(en().options(), &MatcherOptions::default());
        assert_eq!(en().locale().id().to_string(), "en_US.UTF-8");
    }

    // --- equal ---

    #[test]
    fn equal_uses_configured_strength() {
        assert_eq!(en().equal("\u{00e9}", "E"), Ok(true));

        let strict = Matcher::with_options(
            "en_US",
            MatcherOptions {
                strength: Strength::Tertiary,
            },
        )
        .unwrap();
        assert_eq!(strict.equal("\u{00e9}", "E"), Ok(false));
        assert_eq!(strict.equal("e\u{0301}", "\u{00e9}"), Ok(true));
    }

    // --- edit_distance ---

    #[test]
    fn empty_inputs() {
        let d = en().edit_distance("", "");
        assert_eq!(d.distance, 0);
        assert_eq!(d.units, UnitKind::Cluster);
        assert_eq!(en().norm_edit_distance("", ""), 0.0);
        assert_eq!(en().match_factor("", ""), 1.0);
    }

    #[test]
    fn one_side_empty() {
        let d = en().edit_distance("abc", "");
        assert_eq!((d.distance, d.referent_units, d.sample_units), (3, 3, 0));
        assert_eq!(en().match_factor("abc", ""), 0.0);
    }

    #[test]
    fn counts_filtered_clusters() {
        let d = en().edit_distance("caf\u{00e9}!", "cafe");
        assert_eq!(d.distance, 0);
        assert_eq!(d.referent_units, 4);
        assert_eq!(d.sample_units, 4);
    }

    #[test]
    fn combining_sequence_is_one_unit() {
        let d = en().edit_distance("cafe\u{0301}", "cafx");
        assert_eq!((d.distance, d.referent_units, d.sample_units), (1, 4, 4));
    }

    #[test]
    fn whitespace_collapsing() {
        let m = en();
        assert_eq!(m.symbols("a  b").unwrap(), m.symbols("a b").unwrap());
        assert_eq!(m.edit_distance("a  b", "a b").distance, 0);
    }

    #[test]
    fn punctuation_ignored() {
        assert_eq!(en().edit_distance("hello!", "hello").distance, 0);
        assert_eq!(en().match_factor("hello!", "hello"), 1.0);
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        assert_eq!(en().edit_distance("Hello, World!", "hello world").distance, 0);
    }

    #[test]
    fn multi_byte_punctuation_is_kept() {
        // Inverted marks are multi-byte clusters and survive filtering.
        let d = en().edit_distance("\u{00bf}que?", "que");
        assert_eq!((d.distance, d.referent_units), (1, 4));
    }

    #[test]
    fn locale_changes_the_distance() {
        let sv = Matcher::new("sv_SE").unwrap();
        assert_eq!(en().edit_distance("\u{00c5}ngstr\u{00f6}m", "angstrom").distance, 0);
        assert_eq!(sv.edit_distance("\u{00c5}ngstr\u{00f6}m", "angstrom").distance, 2);
    }

    // --- fallback ---

    #[test]
    fn invalid_utf8_falls_back_to_bytes() {
        let d = en().edit_distance(b"ab\xffc", "abc");
        assert_eq!(d.units, UnitKind::Byte);
        assert_eq!((d.distance, d.referent_units, d.sample_units), (1, 4, 3));
        assert_eq!(en().norm_edit_distance(b"ab\xffc", "abc"), 0.25);
    }

    #[test]
    fn fallback_counts_raw_bytes_of_both_sides() {
        // The valid side is counted in bytes too, punctuation included.
        let d = en().edit_distance("caf\u{00e9}!", b"\xff");
        assert_eq!(d.units, UnitKind::Byte);
        assert_eq!((d.referent_units, d.sample_units), (6, 1));
        assert_eq!(d.distance, 6);
    }

    #[test]
    fn try_edit_distance_reports_failure() {
        assert!(matches!(
            en().try_edit_distance("ok", b"\xc3"),
            Err(MatchError::Segmentation(_))
        ));
    }

    #[test]
    fn fallback_is_case_sensitive() {
        let d = en().edit_distance(b"AB\xff", b"ab\xff");
        assert_eq!((d.distance, d.units), (2, UnitKind::Byte));
    }
}
