/// Frequency of each distinct label, most frequent first.
///
/// Ties keep the order in which the label first appears.
pub fn value_counts<'a, I>(labels: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    // stable, so first-appearance order survives among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Share of the total held by each count, as a fraction in `0.0..=1.0`.
pub fn shares(counts: &[(&str, usize)]) -> Vec<f64> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|(_, n)| *n as f64 / total as f64)
        .collect()
}

/// Percentage label with one decimal place, e.g. `6.7%`.
pub fn percent_label(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}
