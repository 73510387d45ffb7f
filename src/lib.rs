//! Nucleotide counting, GC content and reverse complement for DNA sequences.

pub mod analysis;
pub mod complement;
pub mod counts;
pub mod error;
pub mod export;
pub mod io;
pub mod normalize;
pub mod sequence;

pub use analysis::{analyze, Analysis};
pub use complement::{reverse_complement, ReverseComplement};
pub use counts::{analyze_counts, gc_content, GcContent, NucleotideCounts};
pub use error::{Result, SeqError};
pub use normalize::{normalize, normalize_with_marker, HEADER_MARKER};
pub use sequence::{validate, Nucleotide, Sequence, ValidatedSequence};
