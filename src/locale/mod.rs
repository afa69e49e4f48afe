//! Locale capabilities consumed by the matcher.
//!
//! A [`LocaleContext`] bundles the three language-specific facilities the
//! matching pipeline needs: character-cluster segmentation, collation at a
//! selectable [`Strength`], and whitespace/punctuation classification.
//! [`UnicodeLocale`] is the provider shipped with this crate; tests and
//! embedders may supply their own.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CollationError, LocaleError, SegmentationError};

/// Unicode-backed locale provider.
pub mod unicode;

pub use unicode::UnicodeLocale;

/// How much of a character's identity a collation comparison considers.
///
/// Strengths are ordered from coarsest to finest, so
/// `Strength::Primary < Strength::Tertiary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    /// Base letters only: case and accents are ignored.
    #[default]
    Primary,
    /// Base letters and accents: case is ignored.
    Secondary,
    /// Base letters, accents and case.
    Tertiary,
}

/// Classification of a single character cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Whitespace character
    Whitespace,
    /// Punctuation character
    Punctuation,
    /// Anything else
    Other,
}

/// Language-specific text facilities used by the matching pipeline.
///
/// Implementations must be immutable once constructed; a single context is
/// shared by every call made through one [`Matcher`](crate::Matcher), possibly
/// from several threads at once.
///
/// For the distance to be a metric, [`compare`](LocaleContext::compare) must
/// induce an equivalence relation at every strength: reflexive, symmetric and
/// transitive.
pub trait LocaleContext: Send + Sync {
    /// Lazy iterator over the character clusters of an input.
    type Segments<'a>: Iterator<Item = Result<&'a str, SegmentationError>>
    where
        Self: 'a;

    /// Split `text` into character clusters, left to right.
    ///
    /// The clusters concatenate back to `text`. An iterator may yield an
    /// error at any point, after which the caller stops consuming it.
    fn segments<'a>(&'a self, text: &'a [u8]) -> Self::Segments<'a>;

    /// Compare two clusters under this locale's collation at `strength`.
    fn compare(&self, a: &str, b: &str, strength: Strength) -> Result<Ordering, CollationError>;

    /// Classify one cluster as whitespace, punctuation, or neither.
    fn classify(&self, segment: &str) -> Result<CharClass, CollationError>;
}

/// A parsed locale identifier.
///
/// Accepts POSIX-style names (`en_US.UTF-8`, `de_DE@euro`), BCP-47-style tags
/// (`sv-SE`, `zh-Hant-TW`), and the root names `C` and `POSIX`. Language and
/// script subtags are normalized to lower and title case, regions to upper
/// case.
///
/// # Examples
///
/// ```
/// use localematch::LocaleId;
///
/// let id = LocaleId::parse("sv_SE.UTF-8").unwrap();
/// assert_eq!(id.language(), Some("sv"));
/// assert_eq!(id.region(), Some("SE"));
/// assert_eq!(id.to_string(), "sv_SE.UTF-8");
///
/// assert!(LocaleId::parse("C").unwrap().is_root());
/// assert!(LocaleId::parse("en_US.ISO-8859-1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    language: Option<String>,
    script: Option<String>,
    region: Option<String>,
    encoding: Option<String>,
    modifier: Option<String>,
}

impl LocaleId {
    /// Parse a locale identifier.
    ///
    /// # Errors
    ///
    /// - [`LocaleError::Empty`] for an empty or blank identifier
    /// - [`LocaleError::UnsupportedEncoding`] when an encoding other than
    ///   UTF-8 is named
    /// - [`LocaleError::Malformed`] for anything else that is not a locale name
    pub fn parse(id: &str) -> Result<Self, LocaleError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LocaleError::Empty);
        }

        let (rest, modifier) = split_at_byte(id, b'@');
        let (name, encoding) = split_at_byte(rest, b'.');

        if let Some(encoding) = encoding {
            if !is_utf8_encoding(encoding) {
                return Err(LocaleError::UnsupportedEncoding(encoding.to_owned()));
            }
        }
        if modifier.is_some_and(|m| m.is_empty() || !m.bytes().all(|b| b.is_ascii_alphanumeric()))
        {
            return Err(LocaleError::Malformed(id.to_owned()));
        }

        let mut parsed = LocaleId {
            language: None,
            script: None,
            region: None,
            encoding: encoding.map(str::to_owned),
            modifier: modifier.map(str::to_owned),
        };

        if name == "C" || name == "POSIX" {
            return Ok(parsed);
        }

        let malformed = || LocaleError::Malformed(id.to_owned());
        let mut subtags = name.split(['_', '-']);

        let language = subtags.next().ok_or_else(malformed)?;
        let alphabetic = language.bytes().all(|b| b.is_ascii_alphabetic());
        if !(2..=3).contains(&language.len()) || !alphabetic {
            return Err(malformed());
        }
        parsed.language = Some(language.to_ascii_lowercase());

        for subtag in subtags {
            let alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let digits = subtag.bytes().all(|b| b.is_ascii_digit());
            match subtag.len() {
                4 if alpha && parsed.script.is_none() && parsed.region.is_none() => {
                    let mut script = subtag.to_ascii_lowercase();
                    script[..1].make_ascii_uppercase();
                    parsed.script = Some(script);
                }
                2 if alpha && parsed.region.is_none() => {
                    parsed.region = Some(subtag.to_ascii_uppercase());
                }
                3 if digits && parsed.region.is_none() => {
                    parsed.region = Some(subtag.to_owned());
                }
                _ => return Err(malformed()),
            }
        }

        Ok(parsed)
    }

    /// Lowercase language subtag, or `None` for the root locale.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Title-case script subtag, if any.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase region subtag, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Modifier after `@`, if any.
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// Whether this is the language-neutral `C`/`POSIX` locale.
    pub fn is_root(&self) -> bool {
        self.language.is_none()
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            None => f.write_str("C")?,
            Some(language) => {
                f.write_str(language)?;
                if let Some(script) = &self.script {
                    write!(f, "_{script}")?;
                }
                if let Some(region) = &self.region {
                    write!(f, "_{region}")?;
                }
            }
        }
        if let Some(encoding) = &self.encoding {
            write!(f, ".{encoding}")?;
        }
        if let Some(modifier) = &self.modifier {
            write!(f, "@{modifier}")?;
        }
        Ok(())
    }
}

/// Split `s` at the first `delim`, dropping the delimiter.
fn split_at_byte(s: &str, delim: u8) -> (&str, Option<&str>) {
    match memchr::memchr(delim, s.as_bytes()) {
        // `delim` is ASCII, so both halves fall on char boundaries.
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

/// `UTF-8`, `utf8`, `UTF_8` and so on.
fn is_utf8_encoding(encoding: &str) -> bool {
    encoding
        .bytes()
        .filter(|b| *b != b'-' && *b != b'_')
        .map(|b| b.to_ascii_lowercase())
        .eq(*b"utf8")
}
