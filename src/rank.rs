use std::collections::{BTreeSet, HashMap};

/// Count-ordered view of a word-count map.
///
/// `entries` is sorted by count descending, then word ascending within each
/// run of equal counts, so a count group is always contiguous. Words are
/// unique because they were map keys upstream.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub entries: Vec<(u32, String)>,
    /// Distinct count values present, largest first.
    pub distinct_counts: Vec<u32>,
    /// Number of contiguous equal-count runs in `entries`.
    pub group_count: usize,
}

/// Order the count map by descending count and ascending word.
///
/// A single two-key comparator produces the same sequence as sorting by
/// count and then re-sorting each equal-count run by word, for every input.
pub fn rank(counts: HashMap<String, u32>) -> Ranking {
    let distinct: BTreeSet<u32> = counts.values().copied().collect();

    let mut entries: Vec<(u32, String)> = counts
        .into_iter()
        .map(|(word, count)| (count, word))
        .collect();
    entries.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    let group_count = entries.chunk_by(|a, b| a.0 == b.0).count();
    let distinct_counts: Vec<u32> = distinct.into_iter().rev().collect();

    Ranking {
        entries,
        distinct_counts,
        group_count,
    }
}
