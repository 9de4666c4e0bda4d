//! Shannon entropy of a label distribution.

use std::collections::HashMap;
use std::hash::Hash;

/// Entropy `H = -Σ p_i ln p_i` of a histogram of label counts.
///
/// Zero counts are ignored; an empty histogram scores 0.
pub fn entropy_from_counts(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let h: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.ln()
        })
        .sum();
    // A single label gives -1 * ln(1) = -0.0.
    h.max(0.0)
}

/// Entropy of the label distribution of `labels`.
///
/// # Examples
///
/// ```
/// use u_assign::partition::shannon_entropy;
///
/// assert_eq!(shannon_entropy(["a", "a", "a"]), 0.0);
/// let h = shannon_entropy(["a", "b", "a", "b"]);
/// assert!((h - 2f64.ln()).abs() < 1e-12);
/// ```
pub fn shannon_entropy<L, I>(labels: I) -> f64
where
    L: Eq + Hash,
    I: IntoIterator<Item = L>,
{
    let mut counts: HashMap<L, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let counts: Vec<usize> = counts.into_values().collect();
    entropy_from_counts(&counts)
}
