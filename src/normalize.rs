//! Turns raw pasted or uploaded text into a flat sequence.

use crate::sequence::Sequence;

/// FASTA header marker.
pub const HEADER_MARKER: char = '>';

/// Normalizes raw text using the FASTA `>` header marker.
///
/// # Examples
///
/// ```
/// use dna_counter::normalize::normalize;
///
/// assert_eq!(normalize(">h1\nAT\n>h2\ngc").as_str(), "ATGC");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Sequence {
    normalize_with_marker(raw, HEADER_MARKER)
}

/// Drops every line starting with `marker`, strips whitespace from the rest,
/// concatenates them in order and uppercases the result.
///
/// Leading indentation before the marker is ignored and the marker is matched
/// case-insensitively, so a header line stays a header line and normalizing
/// twice gives the same result as normalizing once.
///
/// Never fails: empty or header-only input yields an empty [`Sequence`].
#[must_use]
pub fn normalize_with_marker(raw: &str, marker: char) -> Sequence {
    let marker = fold_case(marker);
    let mut out = String::with_capacity(raw.len());
    for line in raw.lines() {
        if line.trim_start().chars().next().map(fold_case) == Some(marker) {
            continue;
        }
        out.extend(line.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase));
    }
    Sequence::new(out)
}

/// First character of the uppercase form, the same character the output starts with.
fn fold_case(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_headers() {
        assert_eq!(normalize(">h1\nAT\n>h2\nGC").as_str(), "ATGC");
    }

    #[test]
    fn test_uppercases() {
        assert_eq!(normalize("acgt\nAcGt").as_str(), "ACGTACGT");
    }

    #[test]
    fn test_crlf_and_inner_whitespace() {
        assert_eq!(normalize(">seq\r\nAC GT\r\n\tTT \r\n").as_str(), "ACGTTT");
    }

    #[test]
    fn test_marker_only_at_line_start() {
        // A marker in the middle of a line is sequence data and will fail validation later
        assert_eq!(normalize("AC>GT").as_str(), "AC>GT");
        assert!(normalize("  >indented header").is_empty());
    }

    #[test]
    fn test_empty_and_header_only() {
        assert!(normalize("").is_empty());
        assert!(normalize(">only a header\n>another").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(">DNA Query\nGAACACGTGG\nagg caa");
        let twice = normalize(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_letter_marker_matches_either_case() {
        let once = normalize_with_marker("aT\nGC", 'A');
        assert_eq!(once.as_str(), "GC");
        assert_eq!(normalize_with_marker(once.as_str(), 'A'), once);
        assert!(normalize_with_marker("Acgt\nacgt", 'a').is_empty());
    }

    #[test]
    fn test_custom_marker() {
        assert_eq!(normalize_with_marker("#comment\nacgt\n>kept", '#').as_str(), "ACGT>KEPT");
    }
}
