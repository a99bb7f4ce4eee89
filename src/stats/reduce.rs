//! Column reductions shared by the reports.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Most frequent value. Ties go to the smallest of the tied values.
/// `None` for an empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Ascending walk; only a strictly higher count replaces the best so far.
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Occurrences per distinct value, highest count first. Equal counts keep
/// the order in which the values were first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Smallest and largest value, `None` for an empty input.
pub fn min_max<T, I>(values: I) -> Option<(T, T)>
where
    T: Ord + Copy,
    I: IntoIterator<Item = T>,
{
    values.into_iter().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

/// Sum and arithmetic mean. The mean is `None` for an empty input.
pub fn sum_and_mean<I>(values: I) -> (f64, Option<f64>)
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), value| (sum + value, n + 1));
    let mean = (n > 0).then(|| sum / n as f64);
    (sum, mean)
}
