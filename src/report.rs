use std::io::Write;

use thiserror::Error;

use crate::rank::Ranking;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the primary report: one `<count>: <word>` line per entry, in the
/// ranking's order.
pub fn write_ranked<W: Write>(mut out: W, ranking: &Ranking) -> Result<(), ReportError> {
    for (count, word) in &ranking.entries {
        writeln!(out, "{count}: {word}")?;
    }
    Ok(())
}

/// Write developer diagnostics: the distinct count set (largest first),
/// grouping summary counters, and the sorted deduplicated word list.
///
/// Takes the full normalized token sequence (before count collapse); the
/// word list is one word per line with no count annotation. Everything here
/// is informational and must never share a stream with the primary report.
pub fn write_diagnostics<W: Write>(
    mut sink: W,
    ranking: &Ranking,
    mut words: Vec<String>,
) -> Result<(), ReportError> {
    let listing: Vec<String> = ranking
        .distinct_counts
        .iter()
        .map(|c| c.to_string())
        .collect();
    writeln!(sink, "distinct counts: {}", listing.join(", "))?;
    writeln!(
        sink,
        "count groups: {}, sorted runs: {}",
        ranking.distinct_counts.len(),
        ranking.group_count
    )?;

    words.sort_unstable();
    words.dedup();
    writeln!(sink, "unique words:")?;
    for word in &words {
        writeln!(sink, "{word}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::rank;
    use std::collections::HashMap;

    fn ranking_of(pairs: &[(&str, u32)]) -> Ranking {
        let counts: HashMap<String, u32> =
            pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect();
        rank(counts)
    }

    #[test]
    fn formats_one_line_per_entry() {
        let ranking = ranking_of(&[("fox", 3), ("the", 2)]);
        let mut out = Vec::new();
        write_ranked(&mut out, &ranking).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3: fox\n2: the\n");
    }

    #[test]
    fn empty_ranking_writes_nothing() {
        let ranking = ranking_of(&[]);
        let mut out = Vec::new();
        write_ranked(&mut out, &ranking).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diagnostics_list_sorted_unique_words() {
        let ranking = ranking_of(&[("fox", 3), ("the", 2)]);
        let words = vec![
            "the".to_string(),
            "the".to_string(),
            "fox".to_string(),
            "fox".to_string(),
            "fox".to_string(),
        ];
        let mut sink = Vec::new();
        write_diagnostics(&mut sink, &ranking, words).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("distinct counts: 3, 2\n"));
        assert!(text.contains("count groups: 2, sorted runs: 2\n"));
        assert!(text.ends_with("unique words:\nfox\nthe\n"));
    }

    #[test]
    fn diagnostics_on_empty_input() {
        let ranking = ranking_of(&[]);
        let mut sink = Vec::new();
        write_diagnostics(&mut sink, &ranking, Vec::new()).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("distinct counts: \n"));
        assert!(text.ends_with("unique words:\n"));
    }
}
