//! Uniform access to matcher inputs.
//!
//! The matcher works on the UTF-8 bytes of its inputs so that text which is
//! not valid UTF-8 can still be compared byte-wise. [`AsMatchInput`] lets
//! string types and byte buffers be passed interchangeably.

use std::borrow::Cow;

/// Types that can be compared by a [`Matcher`](crate::Matcher).
///
/// # Built-in Implementations
///
/// - [`str`], [`String`] and [`Cow<'_, str>`] -- their UTF-8 bytes
/// - `[u8]`, `[u8; N]`, [`Vec<u8>`] and [`Cow<'_, [u8]>`] -- as is
/// - `&T` for any `T` above
///
/// # Examples
///
/// ```
/// use localematch::AsMatchInput;
///
/// assert_eq!("hi".as_match_bytes(), b"hi");
/// assert_eq!(String::from("hi").as_match_bytes(), b"hi");
/// assert_eq!(b"\xffhi".as_match_bytes(), b"\xffhi");
/// ```
pub trait AsMatchInput {
    /// The bytes to segment, or to compare directly when segmentation fails.
    fn as_match_bytes(&self) -> &[u8];
}

impl AsMatchInput for str {
    fn as_match_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMatchInput for String {
    fn as_match_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMatchInput for Cow<'_, str> {
    fn as_match_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMatchInput for [u8] {
    fn as_match_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> AsMatchInput for [u8; N] {
    fn as_match_bytes(&self) -> &[u8] {
        self
    }
}

impl AsMatchInput for Vec<u8> {
    fn as_match_bytes(&self) -> &[u8] {
        self
    }
}

impl AsMatchInput for Cow<'_, [u8]> {
    fn as_match_bytes(&self) -> &[u8] {
        self
    }
}

impl<T: AsMatchInput + ?Sized> AsMatchInput for &T {
    fn as_match_bytes(&self) -> &[u8] {
        (**self).as_match_bytes()
    }
}
