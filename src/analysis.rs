//! The full normalize → validate → count/complement pipeline.

use crate::complement::{reverse_complement, ReverseComplement};
use crate::counts::{gc_content, GcContent, NucleotideCounts};
use crate::error::{Result, SeqError};
use crate::normalize::normalize_with_marker;
use crate::sequence::{validate, ValidatedSequence};

/// Every derived value for one input.
///
/// `gc_content` holds [`SeqError::EmptySequence`] for an empty sequence; the
/// caller decides how to display it.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub sequence: ValidatedSequence,
    pub counts: NucleotideCounts,
    pub gc_content: Result<GcContent>,
    pub reverse_complement: ReverseComplement,
}

impl Analysis {
    /// Runs counting and complementing on an already validated sequence.
    #[must_use]
    pub fn from_validated(sequence: ValidatedSequence) -> Self {
        let counts = NucleotideCounts::tally(&sequence);
        let gc_content = gc_content(&counts);
        let reverse_complement = reverse_complement(&sequence);
        Analysis { sequence, counts, gc_content, reverse_complement }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Analyzes raw text, using `marker` to recognise header lines.
///
/// # Errors
///
/// Returns [`SeqError::InvalidAlphabet`] if the normalized text contains
/// anything other than A, T, G or C. Nothing is computed in that case.
pub fn analyze(raw: &str, marker: char) -> Result<Analysis> {
    let sequence = validate(normalize_with_marker(raw, marker))?;
    Ok(Analysis::from_validated(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::HEADER_MARKER;

    #[test]
    fn test_end_to_end() {
        let analysis = analyze(">DNA Query\nGAACACGTGG\n", HEADER_MARKER).unwrap();
        assert_eq!(analysis.len(), 10);
        assert_eq!(analysis.counts, NucleotideCounts { a: 3, t: 1, g: 4, c: 2 });
        assert_eq!(analysis.gc_content.unwrap().to_string(), "60.00%");
        assert_eq!(analysis.reverse_complement.as_str(), "CCACGTGTTC");
    }

    #[test]
    fn test_header_only_input() {
        let analysis = analyze(">nothing here", HEADER_MARKER).unwrap();
        assert!(analysis.is_empty());
        assert_eq!(analysis.counts, NucleotideCounts::default());
        assert_eq!(analysis.gc_content, Err(SeqError::EmptySequence));
        assert!(analysis.reverse_complement.is_empty());
    }

    #[test]
    fn test_invalid_input_halts() {
        let err = analyze(">x\nACGN", HEADER_MARKER).unwrap_err();
        assert_eq!(err, SeqError::InvalidAlphabet { base: 'N', position: 3 });
    }
}
