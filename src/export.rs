//! CSV export of the nucleotide count table.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::counts::NucleotideCounts;

#[derive(Debug, Serialize)]
struct CountRow {
    #[serde(rename = "Nucleotide")]
    nucleotide: char,
    #[serde(rename = "Count")]
    count: usize,
}

/// Writes `Nucleotide,Count` rows in A, T, G, C order.
pub fn write_counts_csv<W: Write>(counts: &NucleotideCounts, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for (base, count) in counts.iter() {
        writer.serialize(CountRow { nucleotide: base.as_char(), count })?;
    }
    writer.flush()?;
    Ok(())
}

/// Serializes the count table to CSV bytes.
pub fn counts_to_csv(counts: &NucleotideCounts) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_counts_csv(counts, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_to_csv() {
        let counts = NucleotideCounts { a: 3, t: 1, g: 4, c: 2 };
        let csv = String::from_utf8(counts_to_csv(&counts).unwrap()).unwrap();
        assert_eq!(csv, "Nucleotide,Count\nA,3\nT,1\nG,4\nC,2\n");
    }

    #[test]
    fn test_empty_counts_still_have_all_rows() {
        let csv = String::from_utf8(counts_to_csv(&NucleotideCounts::default()).unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 5);
        assert!(csv.ends_with("C,0\n"));
    }
}
