use dna_counter::{reverse_complement, validate, Sequence, ValidatedSequence};

fn validated(seq: &str) -> ValidatedSequence {
    validate(Sequence::new(seq)).unwrap()
}

#[test]
fn test_reverse_complement_basic() {
    // Basic A/T/G/C mapping
    let result = reverse_complement(&validated("ATGC"));
    assert_eq!(result.as_str(), "GCAT");
}

#[test]
fn test_reverse_complement_example_query() {
    let result = reverse_complement(&validated("GAACACGTGG"));
    assert_eq!(result.as_str(), "CCACGTGTTC");
}

#[test]
fn test_reverse_complement_empty() {
    // Empty sequence
    let result = reverse_complement(&validated(""));
    assert!(result.is_empty());
}

#[test]
fn test_reverse_complement_long_sequence() {
    // Longer sequence
    let result = reverse_complement(&validated("AAATTTGGGCCC"));
    assert_eq!(result.as_str(), "GGGCCCAAATTT");
}

#[test]
fn test_reverse_complement_palindrome() {
    // Palindromic sequence
    let result = reverse_complement(&validated("GAATTC")); // EcoRI site
    assert_eq!(result.as_str(), "GAATTC");
}

#[test]
fn test_reverse_complement_twice_is_identity() {
    let seq = validated("GAACACGTGGAGGCAAACAGG");
    let once = reverse_complement(&seq);
    let twice = reverse_complement(&validated(once.as_str()));
    assert_eq!(twice.as_str(), seq.as_str());
}
