//! Nucleotide alphabet and the sequence types that flow through the pipeline.

use std::fmt;

use crate::error::{Result, SeqError};

/// One of the four DNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    /// All bases in report order.
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::G, Nucleotide::C];

    /// Parses an uppercase base. Lowercase input is expected to be normalized first.
    #[inline]
    #[must_use]
    pub const fn from_byte(base: u8) -> Option<Self> {
        match base {
            b'A' => Some(Nucleotide::A),
            b'T' => Some(Nucleotide::T),
            b'G' => Some(Nucleotide::G),
            b'C' => Some(Nucleotide::C),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::T => b'T',
            Nucleotide::G => b'G',
            Nucleotide::C => b'C',
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Watson-Crick partner: A<->T, G<->C.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Normalized but not yet validated sequence text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence(String);

impl Sequence {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Sequence(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters. Matches the positions reported by [`validate`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sequence known to contain only A, T, G and C.
///
/// Only [`validate`] constructs this type, so every byte is one of the four
/// bases and is therefore a single ASCII character. There is no mutating API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedSequence(String);

impl ValidatedSequence {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the bases in order.
    pub fn nucleotides(&self) -> impl DoubleEndedIterator<Item = Nucleotide> + '_ {
        self.0
            .bytes()
            .map(|b| Nucleotide::from_byte(b).unwrap_or_else(|| unreachable!("unvalidated base {:?}", b as char)))
    }
}

impl fmt::Display for ValidatedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks that every character of `seq` is A, T, G or C.
///
/// Stops at the first disallowed character and reports it with its 0-based
/// position. The empty sequence is valid. The inner buffer is moved, not copied.
///
/// # Errors
///
/// Returns [`SeqError::InvalidAlphabet`] if any character is outside {A, T, G, C}.
///
/// # Examples
///
/// ```
/// use dna_counter::sequence::{validate, Sequence};
///
/// assert!(validate(Sequence::new("GATTACA")).is_ok());
/// assert!(validate(Sequence::new("ATXG")).is_err());
/// ```
pub fn validate(seq: Sequence) -> Result<ValidatedSequence> {
    if let Some((position, base)) =
        seq.0.chars().enumerate().find(|&(_, c)| !c.is_ascii() || Nucleotide::from_byte(c as u8).is_none())
    {
        return Err(SeqError::InvalidAlphabet { base, position });
    }
    Ok(ValidatedSequence(seq.0))
}
