//! Reverse complement of a validated sequence.

use std::fmt;

use crate::sequence::ValidatedSequence;

/// Reverse complement of a [`ValidatedSequence`], always of the same length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReverseComplement(String);

impl ReverseComplement {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReverseComplement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Walks `seq` from the last base to the first, mapping A<->T and G<->C.
///
/// The input is borrowed and left untouched.
///
/// # Examples
///
/// ```
/// use dna_counter::complement::reverse_complement;
/// use dna_counter::sequence::{validate, Sequence};
///
/// let seq = validate(Sequence::new("GAACACGTGG")).unwrap();
/// assert_eq!(reverse_complement(&seq).as_str(), "CCACGTGTTC");
/// ```
#[must_use]
pub fn reverse_complement(seq: &ValidatedSequence) -> ReverseComplement {
    ReverseComplement(seq.nucleotides().rev().map(|base| base.complement().as_char()).collect())
}
