//! Cumulative-mass lookup shared by weighted sampling and Bayesian search

/// Running sums of `weights` with a leading zero
///
/// `sums[i]` is the total weight of `weights[..i]`, so the mass of the
/// half-open slice `weights[a..b]` is `sums[b] - sums[a]`.
#[must_use]
pub fn prefix_sums(weights: &[f64]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(weights.len() + 1);
    let mut running = 0.0;
    sums.push(running);
    for &w in weights {
        running += w;
        sums.push(running);
    }
    sums
}

/// First index whose running sum reaches `threshold`
///
/// `cumulative` must be non-decreasing. If no entry reaches the threshold
/// (rounding on the last entry), the last index is returned, so the result
/// is always a valid index into a non-empty slice.
///
/// # Examples
/// ```
/// use higher_lower::distribution::locate;
///
/// let cumulative = [0.1, 0.3, 0.6, 1.0];
/// assert_eq!(locate(&cumulative, 0.0), 0);
/// assert_eq!(locate(&cumulative, 0.3), 1);
/// assert_eq!(locate(&cumulative, 0.31), 2);
/// assert_eq!(locate(&cumulative, 2.0), 3);
/// ```
#[must_use]
pub fn locate(cumulative: &[f64], threshold: f64) -> usize {
    let idx = cumulative.partition_point(|&sum| sum < threshold);
    idx.min(cumulative.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sums_start_at_zero() {
        let sums = prefix_sums(&[1.0, 2.0, 3.0]);
        assert_eq!(sums, vec![0.0, 1.0, 3.0, 6.0]);
    }

    #[test]
    fn prefix_sums_of_empty() {
        assert_eq!(prefix_sums(&[]), vec![0.0]);
    }

    #[test]
    fn locate_exact_hit_takes_first_index() {
        // Flat section: threshold met first at index 1
        let cumulative = [0.2, 0.5, 0.5, 1.0];
        assert_eq!(locate(&cumulative, 0.5), 1);
    }

    #[test]
    fn locate_clamps_past_end() {
        let cumulative = [0.25, 0.5, 0.75, 0.999_999];
        assert_eq!(locate(&cumulative, 1.0), 3);
    }

    #[test]
    fn locate_single_entry() {
        assert_eq!(locate(&[1.0], 0.5), 0);
        assert_eq!(locate(&[1.0], 5.0), 0);
    }
}
