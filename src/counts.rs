//! Per-base tallies and GC content.

use std::fmt;

use crate::error::{Result, SeqError};
use crate::sequence::{Nucleotide, ValidatedSequence};

/// Occurrences of each base in a validated sequence.
///
/// The four counts always sum to the length of the sequence they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NucleotideCounts {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl NucleotideCounts {
    /// Tallies every base of `seq`. Cannot fail on a validated sequence.
    #[must_use]
    pub fn tally(seq: &ValidatedSequence) -> Self {
        let mut counts = NucleotideCounts::default();
        for base in seq.nucleotides() {
            match base {
                Nucleotide::A => counts.a += 1,
                Nucleotide::T => counts.t += 1,
                Nucleotide::G => counts.g += 1,
                Nucleotide::C => counts.c += 1,
            }
        }
        counts
    }

    #[must_use]
    pub const fn get(&self, base: Nucleotide) -> usize {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::T => self.t,
            Nucleotide::G => self.g,
            Nucleotide::C => self.c,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    /// Number of G plus C bases.
    #[must_use]
    pub const fn gc(&self) -> usize {
        self.g + self.c
    }

    /// (base, count) pairs in A, T, G, C order.
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, usize)> + '_ {
        Nucleotide::ALL.into_iter().map(move |base| (base, self.get(base)))
    }
}

/// GC content as a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GcContent(f64);

impl GcContent {
    #[must_use]
    pub const fn percent(self) -> f64 {
        self.0
    }
}

impl fmt::Display for GcContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Computes `100 * (G + C) / total` from the counts.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] when the counts total zero; no NaN or
/// default value is ever produced.
pub fn gc_content(counts: &NucleotideCounts) -> Result<GcContent> {
    let total = counts.total();
    if total == 0 {
        return Err(SeqError::EmptySequence);
    }
    Ok(GcContent(counts.gc() as f64 / total as f64 * 100.0))
}

/// Tallies `seq` and derives its GC content.
///
/// # Errors
///
/// Returns [`SeqError::EmptySequence`] for a zero-length sequence.
///
/// # Examples
///
/// ```
/// use dna_counter::counts::analyze_counts;
/// use dna_counter::sequence::{validate, Sequence};
///
/// let seq = validate(Sequence::new("GAACACGTGG")).unwrap();
/// let (counts, gc) = analyze_counts(&seq).unwrap();
/// assert_eq!((counts.a, counts.t, counts.g, counts.c), (3, 1, 4, 2));
/// assert_eq!(gc.to_string(), "60.00%");
/// ```
pub fn analyze_counts(seq: &ValidatedSequence) -> Result<(NucleotideCounts, GcContent)> {
    let counts = NucleotideCounts::tally(seq);
    let gc = gc_content(&counts)?;
    Ok((counts, gc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{validate, Sequence};

    fn validated(s: &str) -> ValidatedSequence {
        validate(Sequence::new(s)).unwrap()
    }

    #[test]
    fn test_tally() {
        let counts = NucleotideCounts::tally(&validated("GAACACGTGG"));
        assert_eq!(counts, NucleotideCounts { a: 3, t: 1, g: 4, c: 2 });
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.gc(), 6);
    }

    #[test]
    fn test_iter_order() {
        let counts = NucleotideCounts { a: 1, t: 2, g: 3, c: 4 };
        let rows: Vec<_> = counts.iter().collect();
        assert_eq!(
            rows,
            vec![(Nucleotide::A, 1), (Nucleotide::T, 2), (Nucleotide::G, 3), (Nucleotide::C, 4)]
        );
    }

    #[test]
    fn test_gc_content_bounds() {
        let (_, all_gc) = analyze_counts(&validated("GCGC")).unwrap();
        assert!((all_gc.percent() - 100.0).abs() < f64::EPSILON);

        let (_, no_gc) = analyze_counts(&validated("ATTA")).unwrap();
        assert!(no_gc.percent().abs() < f64::EPSILON);
    }

    #[test]
    fn test_gc_content_display() {
        let (_, gc) = analyze_counts(&validated("GAT")).unwrap();
        assert_eq!(gc.to_string(), "33.33%");
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        let empty = validated("");
        assert_eq!(NucleotideCounts::tally(&empty), NucleotideCounts::default());
        assert_eq!(analyze_counts(&empty), Err(SeqError::EmptySequence));
        assert_eq!(gc_content(&NucleotideCounts::default()), Err(SeqError::EmptySequence));
    }
}
