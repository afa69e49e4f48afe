//! [`LocaleContext`] backed by the Unicode segmentation and normalization
//! tables.
//!
//! Character clusters are extended grapheme clusters. Collation compares
//! per-cluster keys built from the normalized text: marks are dropped at
//! primary strength and full Unicode case folding applies below tertiary
//! strength. A handful of
//! languages tailor this, either by treating some accented letters as letters
//! in their own right or by casing `i` the Turkic way.

use std::cmp::Ordering;

use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{compose, is_combining_mark};
use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use super::{CharClass, LocaleContext, LocaleId, Strength};
use crate::error::{CollationError, LocaleError, SegmentationError};

/// Language-specific deviations from root collation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tailoring {
    /// Lowercase letters that keep their marks at primary strength.
    distinct: &'static [char],
    /// `I` lowercases to dotless `ı` and `İ` to `i`.
    turkic_casing: bool,
}

impl Tailoring {
    const ROOT: Tailoring = Tailoring {
        distinct: &[],
        turkic_casing: false,
    };

    const fn letters(distinct: &'static [char]) -> Tailoring {
        Tailoring {
            distinct,
            turkic_casing: false,
        }
    }

    fn for_language(language: Option<&str>) -> Tailoring {
        match language {
            Some("sv" | "fi") => Tailoring::letters(&['å', 'ä', 'ö']),
            Some("da" | "nb" | "nn" | "no") => Tailoring::letters(&['æ', 'ø', 'å']),
            Some("es") => Tailoring::letters(&['ñ']),
            Some("tr" | "az") => Tailoring {
                distinct: &[],
                turkic_casing: true,
            },
            _ => Tailoring::ROOT,
        }
    }
}

/// Unicode-backed locale provider.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use localematch::{LocaleContext, Strength, UnicodeLocale};
///
/// let en = UnicodeLocale::new("en_US").unwrap();
/// assert_eq!(en.compare("\u{00c5}", "a", Strength::Primary), Ok(Ordering::Equal));
///
/// // Swedish sorts "å" as a letter of its own.
/// let sv = UnicodeLocale::new("sv_SE").unwrap();
/// assert_ne!(sv.compare("\u{00c5}", "a", Strength::Primary), Ok(Ordering::Equal));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeLocale {
    id: LocaleId,
    tailoring: Tailoring,
}

impl UnicodeLocale {
    /// Resolve a locale identifier such as `en_US.UTF-8` or `tr-TR`.
    ///
    /// # Errors
    ///
    /// Any [`LocaleError`] from [`LocaleId::parse`].
    pub fn new(id: &str) -> Result<Self, LocaleError> {
        LocaleId::parse(id).map(Self::from_id)
    }

    /// Build a provider for an already parsed identifier.
    pub fn from_id(id: LocaleId) -> Self {
        let tailoring = Tailoring::for_language(id.language());
        Self { id, tailoring }
    }

    /// The identifier this provider was built from.
    pub fn id(&self) -> &LocaleId {
        &self.id
    }

    /// Append the collation key of `text` at `strength` to `key`.
    fn push_key(&self, text: &str, strength: Strength, key: &mut Vec<char>) {
        if strength == Strength::Tertiary {
            key.extend(text.nfd());
            return;
        }

        let folded: Vec<char> = text
            .nfc()
            .map(|c| self.turkic_lower(c))
            .nfd()
            .case_fold()
            .nfd()
            .collect();

        let mut rest = folded.as_slice();
        while let Some((&base, tail)) = rest.split_first() {
            if is_combining_mark(base) {
                // A mark with no base letter in this cluster.
                if strength != Strength::Primary {
                    key.push(base);
                }
                rest = tail;
                continue;
            }

            let marks = tail.iter().take_while(|c| is_combining_mark(**c)).count();
            let (marks, tail) = tail.split_at(marks);
            let tailored = self.tailored_letter(base, marks);

            key.push(tailored.map_or(base, |(_, letter)| letter));
            if strength != Strength::Primary {
                key.extend(
                    marks
                        .iter()
                        .enumerate()
                        .filter(|(at, _)| tailored.is_none_or(|(used, _)| used != *at))
                        .map(|(_, mark)| *mark),
                );
            }
            rest = tail;
        }
    }

    /// `I` and `İ` under Turkic casing; every other char unchanged.
    fn turkic_lower(&self, c: char) -> char {
        match (self.tailoring.turkic_casing, c) {
            (true, 'I') => 'ı',
            (true, 'İ') => 'i',
            _ => c,
        }
    }

    /// The first of `marks` that composes with `base` into a letter this
    /// language treats as distinct, with its position.
    fn tailored_letter(&self, base: char, marks: &[char]) -> Option<(usize, char)> {
        marks.iter().enumerate().find_map(|(at, &mark)| {
            compose(base, mark)
                .filter(|letter| self.tailoring.distinct.contains(letter))
                .map(|letter| (at, letter))
        })
    }
}

/// Character clusters of one input, produced by [`UnicodeLocale`].
pub struct Clusters<'a> {
    state: ClusterState<'a>,
}

enum ClusterState<'a> {
    Graphemes(Graphemes<'a>),
    Failed(Option<SegmentationError>),
}

impl<'a> Iterator for Clusters<'a> {
    type Item = Result<&'a str, SegmentationError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            ClusterState::Graphemes(graphemes) => graphemes.next().map(Ok),
            ClusterState::Failed(err) => err.take().map(Err),
        }
    }
}

impl LocaleContext for UnicodeLocale {
    type Segments<'a> = Clusters<'a>;

    fn segments<'a>(&'a self, text: &'a [u8]) -> Clusters<'a> {
        let state = match std::str::from_utf8(text) {
            Ok(text) => ClusterState::Graphemes(text.graphemes(true)),
            Err(err) => ClusterState::Failed(Some(SegmentationError::InvalidEncoding {
                valid_up_to: err.valid_up_to(),
            })),
        };
        Clusters { state }
    }

    fn compare(&self, a: &str, b: &str, strength: Strength) -> Result<Ordering, CollationError> {
        if a == b {
            return Ok(Ordering::Equal);
        }

        // ASCII fast path; Turkic casing maps ASCII `I` outside ASCII.
        if a.is_ascii() && b.is_ascii() && !self.tailoring.turkic_casing {
            return Ok(match strength {
                Strength::Tertiary => a.cmp(b),
                Strength::Primary | Strength::Secondary => a
                    .bytes()
                    .map(|c| c.to_ascii_lowercase())
                    .cmp(b.bytes().map(|c| c.to_ascii_lowercase())),
            });
        }

        let mut key_a = Vec::with_capacity(a.len());
        let mut key_b = Vec::with_capacity(b.len());
        self.push_key(a, strength, &mut key_a);
        self.push_key(b, strength, &mut key_b);
        Ok(key_a.cmp(&key_b))
    }

    fn classify(&self, segment: &str) -> Result<CharClass, CollationError> {
        Ok(match segment.as_bytes() {
            [byte] => classify_byte(*byte),
            [] => CharClass::Other,
            _ if segment.chars().all(char::is_whitespace) => CharClass::Whitespace,
            _ => CharClass::Other,
        })
    }
}

/// `isspace`/`ispunct` in the C locale.
fn classify_byte(byte: u8) -> CharClass {
    match byte {
        b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r' => CharClass::Whitespace,
        _ if byte.is_ascii_punctuation() => CharClass::Punctuation,
        _ => CharClass::Other,
    }
}
