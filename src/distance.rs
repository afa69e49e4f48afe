//! Levenshtein distance over arbitrary sequences.
//!
//! The engine is generic over the element type and over the equality used to
//! decide whether a substitution is free. Insertions, deletions and
//! substitutions of unequal elements each cost 1.

use std::convert::Infallible;

/// Levenshtein distance between `a` and `b` under `equal`.
///
/// `equal(x, y)` is always called with `x` from `a` and `y` from `b`. The
/// result is a metric whenever `equal` is an equivalence relation.
///
/// Runs in `O(|a| * |b|)` time and keeps two rows sized by the shorter input.
///
/// # Examples
///
/// ```
/// use localematch::distance::levenshtein;
///
/// assert_eq!(levenshtein(b"kitten", b"sitting", |a, b| a == b), 3);
///
/// let a: Vec<char> = "Flaw".chars().collect();
/// let b: Vec<char> = "lawn".chars().collect();
/// assert_eq!(levenshtein(&a, &b, |x, y| x.eq_ignore_ascii_case(y)), 2);
/// ```
pub fn levenshtein<T, F>(a: &[T], b: &[T], mut equal: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    match try_levenshtein(a, b, |x, y| Ok::<_, Infallible>(equal(x, y))) {
        Ok(distance) => distance,
        Err(never) => match never {},
    }
}

/// Levenshtein distance under a fallible equality.
///
/// Stops at the first error `equal` returns and propagates it.
///
/// # Errors
///
/// Whatever `equal` returns.
///
/// # Examples
///
/// ```
/// use localematch::distance::try_levenshtein;
///
/// let d = try_levenshtein(&[1, 2, 3], &[1, 3], |a, b| Ok::<_, ()>(a == b));
/// assert_eq!(d, Ok(1));
///
/// let err = try_levenshtein(&[1], &[2], |_, _| Err("no comparator"));
/// assert_eq!(err, Err("no comparator"));
/// ```
pub fn try_levenshtein<T, E, F>(a: &[T], b: &[T], mut equal: F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    if a.len() >= b.len() {
        rolling_rows(a, b, &mut equal)
    } else {
        rolling_rows(b, a, &mut |x: &T, y: &T| equal(y, x))
    }
}

/// Two-row dynamic programme with the rows sized by `short`.
fn rolling_rows<T, E>(
    long: &[T],
    short: &[T],
    equal: &mut dyn FnMut(&T, &T) -> Result<bool, E>,
) -> Result<usize, E> {
    if short.is_empty() {
        return Ok(long.len());
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(!equal(x, y)?);
            let insertion = current[j] + 1;
            let deletion = previous[j + 1] + 1;
            current[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut current, &mut previous);
    }

    Ok(previous[short.len()])
}
