use std::collections::HashMap;

/// Counts items and returns the `limit` most frequent with their counts
///
/// Items with equal counts keep the order in which they first appeared.
pub fn most_common<I>(items: I, limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        match positions.get(&item) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // stable: ties stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
