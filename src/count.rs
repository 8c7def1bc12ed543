use std::collections::HashMap;

/// Count occurrences of each distinct word in the normalized token sequence.
///
/// The map is pre-sized from the slice length; iteration order of the
/// result is unspecified and the ranking stage re-sorts anyway.
pub fn count_occurrences(words: &[String]) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::with_capacity(words.len());
    for word in words {
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.insert(word.clone(), 1);
            }
        }
    }
    counts
}
