//! Configuration options for a [`Matcher`](crate::Matcher).
//!
//! [`MatcherOptions`] controls how strictly two character clusters must agree
//! to be counted as the same symbol.

use crate::locale::Strength;

/// Options fixed at [`Matcher`](crate::Matcher) construction.
///
/// # Defaults
///
/// - `strength`: [`Strength::Primary`] (case and accents are ignored)
///
/// # Examples
///
/// ```
/// use localematch::{MatcherOptions, Strength};
///
/// let opts = MatcherOptions::default();
/// assert_eq!(opts.strength, Strength::Primary);
///
/// // Treat "e" and "é" as different symbols.
/// let opts = MatcherOptions { strength: Strength::Secondary, ..Default::default() };
/// assert_eq!(opts.strength, Strength::Secondary);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Collation strength at which two clusters are compared.
    pub strength: Strength,
}
