//! Ranking candidate strings against a single referent.
//!
//! Every candidate is scored with [`Matcher::match_factor`]. Candidates under
//! a minimum factor are dropped and the rest are ordered best first, with
//! ties kept in input order.

use std::cmp::Ordering;

use crate::input::AsMatchInput;
use crate::locale::LocaleContext;
use crate::matcher::Matcher;

/// A candidate together with its score against the referent.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<'a, T> {
    /// Reference to the candidate.
    pub candidate: &'a T,
    /// Position of the candidate in the input slice.
    pub index: usize,
    /// Match factor against the referent, in `[0, 1]`.
    pub factor: f64,
}

/// Two-level comparator for ranked candidates.
///
/// 1. **Higher factor wins.**
/// 2. **Lower index wins** when factors are equal, so sorting is stable with
///    respect to the input order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use localematch::{RankedCandidate, compare_ranked};
///
/// let a = RankedCandidate { candidate: &"color", index: 1, factor: 0.8 };
/// let b = RankedCandidate { candidate: &"colour", index: 0, factor: 0.6 };
/// assert_eq!(compare_ranked(&a, &b), Ordering::Less);
/// ```
pub fn compare_ranked<T>(a: &RankedCandidate<'_, T>, b: &RankedCandidate<'_, T>) -> Ordering {
    // Factors are never NaN, but treat an indeterminate comparison as a tie.
    b.factor
        .partial_cmp(&a.factor)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.index.cmp(&b.index))
}

impl<L: LocaleContext> Matcher<L> {
    /// Score `candidates` against `referent` and sort them best first.
    ///
    /// Candidates whose match factor is below `min_factor` are left out.
    /// Pass `0.0` to keep everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use localematch::Matcher;
    ///
    /// let matcher = Matcher::new("en_US").unwrap();
    /// let words = ["banana", "Bandana", "apple", "banana!"];
    ///
    /// let ranked = matcher.rank("banana", &words, 0.5);
    /// let order: Vec<&str> = ranked.iter().map(|r| *r.candidate).collect();
    /// assert_eq!(order, ["banana", "banana!", "Bandana"]);
    /// ```
    pub fn rank<'c, R, T>(
        &self,
        referent: &R,
        candidates: &'c [T],
        min_factor: f64,
    ) -> Vec<RankedCandidate<'c, T>>
    where
        R: AsMatchInput + ?Sized,
        T: AsMatchInput,
    {
        let mut ranked: Vec<_> = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| RankedCandidate {
                candidate,
                index,
                factor: self.match_factor(referent, candidate),
            })
            .filter(|r| r.factor >= min_factor)
            .collect();
        ranked.sort_by(compare_ranked);
        ranked
    }
}
